//! Graph nodes and their unresolved relationship references.

use docmap_core::EntityHandle;
use docmap_document::{RelationshipData, ResourceIdentifier};
use std::fmt;

/// Where a resource appeared in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Primary data; the index is set when `data` is an array.
    Data(Option<usize>),
    /// The `included` array at the given index.
    Included(usize),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Data(None) => write!(f, "/data"),
            Origin::Data(Some(i)) => write!(f, "/data/{}", i),
            Origin::Included(i) => write!(f, "/included/{}", i),
        }
    }
}

/// A relationship reference waiting for the link pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingLink {
    Single(ResourceIdentifier),
    /// References in document order.
    Many(Vec<ResourceIdentifier>),
}

impl PendingLink {
    /// Convert parsed relationship data. Empty data yields nothing to link.
    pub fn from_data(data: &RelationshipData) -> Option<Self> {
        match data {
            RelationshipData::Single(id) => Some(PendingLink::Single(id.clone())),
            RelationshipData::Many(ids) => Some(PendingLink::Many(ids.clone())),
            RelationshipData::Empty => None,
        }
    }

    /// Referenced identifiers in document order.
    pub fn targets(&self) -> &[ResourceIdentifier] {
        match self {
            PendingLink::Single(id) => std::slice::from_ref(id),
            PendingLink::Many(ids) => ids,
        }
    }
}

/// A built resource: its entity plus relationships not yet wired.
#[derive(Debug, Clone)]
pub struct ResourceNode {
    pub key: ResourceIdentifier,
    pub entity: EntityHandle,
    pub origin: Origin,
    /// Pending links keyed by domain field name, in capture order.
    pub pending: Vec<(String, PendingLink)>,
}

impl ResourceNode {
    pub fn new(key: ResourceIdentifier, entity: EntityHandle, origin: Origin) -> Self {
        Self {
            key,
            entity,
            origin,
            pending: Vec::new(),
        }
    }

    /// Record a relationship to resolve later.
    pub fn defer(&mut self, field: impl Into<String>, link: PendingLink) {
        self.pending.push((field.into(), link));
    }
}
