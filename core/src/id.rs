//! Identity types for docmap entities.
//!
//! Entities built during one mapping operation live in an arena and are
//! addressed by `EntityHandle`. Persisted keys are opaque strings owned by
//! the repository.

use std::fmt;

/// First character of a document-scoped temporary identifier.
pub const TEMPORARY_ID_SENTINEL: char = '@';

/// Returns true if `raw_id` names a not-yet-persisted, document-local resource.
pub fn is_temporary_id(raw_id: &str) -> bool {
    raw_id.starts_with(TEMPORARY_ID_SENTINEL)
}

/// Handle to an entity inside an `EntitySet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub usize);

impl EntityHandle {
    /// Create a new handle from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw arena index.
    pub fn raw(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}
