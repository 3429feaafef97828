//! The persistence collaborator.
//!
//! The mapper never touches a data store directly. Every lookup, validation
//! and write goes through an implementation of [`Repository`].

use crate::{Entity, EntityHandle, EntitySet, FieldErrors, RepositoryResult, Value};
use std::collections::BTreeMap;

/// Fixed field=value constraints applied to lookups and to new entities.
pub type Scope = BTreeMap<String, Value>;

/// Storage operations the mapper depends on.
pub trait Repository {
    /// Find exactly one persisted entity of `domain_type` with key `id` whose
    /// fields match every entry of `scope`.
    ///
    /// A missing id and an id outside the scope must both yield
    /// [`RepositoryError::NotFound`](crate::RepositoryError::NotFound).
    fn find_scoped(&self, domain_type: &str, scope: &Scope, id: &str) -> RepositoryResult<Entity>;

    /// Field-level validation of an entity. Never persists anything.
    fn validate(&self, entity: &Entity) -> FieldErrors;

    /// Persist the entity behind `handle`.
    ///
    /// The whole set is passed so the implementation can assign keys to
    /// referenced entities that have not been saved yet.
    fn save(&mut self, handle: EntityHandle, entities: &mut EntitySet) -> RepositoryResult<()>;
}
