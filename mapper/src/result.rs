//! Mapping result types.

use docmap_core::{Entity, EntityHandle, EntitySet};
use std::collections::HashSet;

/// A built resource as it appears in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedResource {
    /// Entity built for the resource.
    pub handle: EntityHandle,
    /// Wire type the resource was declared with.
    pub wire_type: String,
    /// Position in the document array it came from; `None` for a single
    /// primary resource.
    pub position: Option<usize>,
}

/// Shape of the primary result, mirroring the document's `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    /// No usable primary resource.
    Missing,
    Single(MappedResource),
    /// Built resources in document order.
    Collection(Vec<MappedResource>),
}

/// Outcome of mapping one document.
///
/// Owns every entity the operation touched, including related entities
/// loaded from the repository that are neither primary nor included.
#[derive(Debug, Clone)]
pub struct Mapping {
    pub entities: EntitySet,
    pub(crate) primary: Primary,
    pub(crate) included: Vec<MappedResource>,
}

impl Mapping {
    pub(crate) fn new(entities: EntitySet, primary: Primary, included: Vec<MappedResource>) -> Self {
        Self {
            entities,
            primary,
            included,
        }
    }

    pub fn primary(&self) -> &Primary {
        &self.primary
    }

    /// Included resources that were built, in document order.
    pub fn included(&self) -> &[MappedResource] {
        &self.included
    }

    /// True if the document's `data` was an array.
    pub fn is_collection(&self) -> bool {
        matches!(self.primary, Primary::Collection(_))
    }

    /// True if the document's `data` was a single usable resource.
    pub fn is_single(&self) -> bool {
        matches!(self.primary, Primary::Single(_))
    }

    /// Handle of a single primary entity.
    pub fn data_handle(&self) -> Option<EntityHandle> {
        match &self.primary {
            Primary::Single(resource) => Some(resource.handle),
            _ => None,
        }
    }

    /// The single primary entity.
    pub fn data(&self) -> Option<&Entity> {
        self.data_handle().and_then(|h| self.entities.get(h))
    }

    /// Primary entity handles in document order (one for a single resource).
    pub fn data_handles(&self) -> Vec<EntityHandle> {
        self.primary_resources().iter().map(|r| r.handle).collect()
    }

    /// Included entity handles in document order.
    pub fn included_handles(&self) -> Vec<EntityHandle> {
        self.included.iter().map(|r| r.handle).collect()
    }

    /// Get any entity of the operation.
    pub fn entity(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle)
    }

    /// Follow a singular association of `handle`.
    pub fn linked(&self, handle: EntityHandle, field: &str) -> Option<&Entity> {
        self.entity(handle)
            .and_then(|e| e.get_ref(field))
            .and_then(|target| self.entity(target))
    }

    /// Follow a collection association of `handle`, skipping unresolved members.
    pub fn linked_many(&self, handle: EntityHandle, field: &str) -> Vec<&Entity> {
        self.entity(handle)
            .and_then(|e| e.get(field))
            .map(|v| v.ref_handles())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|target| self.entity(target))
            .collect()
    }

    pub(crate) fn primary_resources(&self) -> &[MappedResource] {
        match &self.primary {
            Primary::Missing => &[],
            Primary::Single(resource) => std::slice::from_ref(resource),
            Primary::Collection(resources) => resources,
        }
    }

    /// Primary then included handles, each entity once.
    pub fn document_handles(&self) -> Vec<EntityHandle> {
        let mut seen = HashSet::new();
        self.primary_resources()
            .iter()
            .chain(self.included.iter())
            .map(|r| r.handle)
            .filter(|h| seen.insert(*h))
            .collect()
    }
}
