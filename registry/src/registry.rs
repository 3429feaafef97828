//! The DomainRegistry - immutable domain type lookup.

use crate::DomainType;
use std::collections::HashMap;

/// The DomainRegistry provides lookup of domain type definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct DomainRegistry {
    /// Domain type definitions by name.
    types: HashMap<String, DomainType>,
}

impl DomainRegistry {
    /// Create a registry (use DomainRegistryBuilder for construction).
    pub(crate) fn new(types: HashMap<String, DomainType>) -> Self {
        Self { types }
    }

    /// Get a type definition by name.
    pub fn get_type(&self, name: &str) -> Option<&DomainType> {
        self.types.get(name)
    }

    /// Check if a type is registered.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Get all type definitions.
    pub fn all_types(&self) -> impl Iterator<Item = &DomainType> {
        self.types.values()
    }

    /// Get the number of types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
