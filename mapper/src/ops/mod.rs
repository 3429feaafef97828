//! Mapping passes.
//!
//! - `build` - first pass: one entity per resource, attributes applied
//! - `link` - second pass: relationship references wired to entities
//! - `save` - validation gate and persistence

mod build;
mod link;
mod save;

pub use build::build_resource;
pub use link::link_all;
pub use save::{save_all, validate_all};

use crate::error::MapperResult;
use docmap_core::{Entity, EntityHandle, EntitySet, Repository, RepositoryError};
use docmap_graph::ResourceGraph;
use docmap_registry::{CompileError, DomainRegistry, DomainType, Ruleset};

/// State shared by the build and link passes of one mapping call.
pub struct MapContext<'a, R: Repository + ?Sized> {
    pub registry: &'a DomainRegistry,
    pub ruleset: &'a Ruleset,
    pub repository: &'a R,
    pub entities: EntitySet,
    pub graph: ResourceGraph,
}

impl<'a, R: Repository + ?Sized> MapContext<'a, R> {
    pub fn new(
        registry: &'a DomainRegistry,
        ruleset: &'a Ruleset,
        repository: &'a R,
    ) -> Self {
        Self {
            registry,
            ruleset,
            repository,
            entities: EntitySet::new(),
            graph: ResourceGraph::new(),
        }
    }
}

fn lookup_type<'a>(registry: &'a DomainRegistry, name: &str) -> MapperResult<&'a DomainType> {
    registry
        .get_type(name)
        .ok_or_else(|| CompileError::unknown_type(name).into())
}

fn entity_mut(entities: &mut EntitySet, handle: EntityHandle) -> MapperResult<&mut Entity> {
    entities
        .get_mut(handle)
        .ok_or_else(|| RepositoryError::UnknownHandle(handle).into())
}
