//! Domain entities and the arena that owns them for one mapping operation.

use crate::{Attributes, EntityHandle, FieldErrors, Value};

/// A domain entity: either freshly created from the document or loaded
/// from the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Domain type name (e.g. `PetDog`).
    pub domain_type: String,
    /// Persisted key, `None` until the repository saves the entity.
    pub id: Option<String>,
    /// Field values keyed by domain field name.
    pub fields: Attributes,
    /// Validation failures reported by the repository on the last check.
    pub errors: FieldErrors,
}

impl Entity {
    /// Create a new, not yet persisted entity.
    pub fn new(domain_type: impl Into<String>) -> Self {
        Self {
            domain_type: domain_type.into(),
            id: None,
            fields: Attributes::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Create an entity as loaded from the repository.
    pub fn persisted(domain_type: impl Into<String>, id: impl Into<String>, fields: Attributes) -> Self {
        Self {
            domain_type: domain_type.into(),
            id: Some(id.into()),
            fields,
            errors: FieldErrors::new(),
        }
    }

    /// Returns true if the repository has not assigned a key yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a string field.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Get the entity referenced by a singular association.
    pub fn get_ref(&self, name: &str) -> Option<EntityHandle> {
        self.fields.get(name).and_then(Value::as_ref_handle)
    }

    /// Set a field value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Append to a collection field, turning an absent or null field into a list.
    pub fn push(&mut self, name: &str, value: Value) {
        let slot = self
            .fields
            .entry(name.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        match slot {
            Value::List(items) => items.push(value),
            other => *other = Value::List(vec![value]),
        }
    }

    /// Returns true if the last validation reported no failures.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Arena of every entity touched by one mapping operation.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its handle.
    pub fn insert(&mut self, entity: Entity) -> EntityHandle {
        let handle = EntityHandle::new(self.entities.len());
        self.entities.push(entity);
        handle
    }

    /// Get an entity by handle.
    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle.raw())
    }

    /// Get a mutable reference to an entity by handle.
    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.entities.get_mut(handle.raw())
    }

    /// Number of entities in the set.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the set holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityHandle::new(i), e))
    }
}
