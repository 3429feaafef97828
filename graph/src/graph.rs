//! Resource graph storage.

use crate::ResourceNode;
use docmap_core::EntityHandle;
use docmap_document::ResourceIdentifier;
use std::collections::HashMap;

/// Nodes built from one document.
///
/// Nodes are kept in insertion order. Only resources carrying an id are
/// indexed; anonymous resources are still linked but cannot be referenced.
#[derive(Debug, Default)]
pub struct ResourceGraph {
    nodes: Vec<ResourceNode>,
    index: HashMap<ResourceIdentifier, usize>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity registered under `key`, if any.
    pub fn lookup(&self, key: &ResourceIdentifier) -> Option<EntityHandle> {
        if key.raw_id.is_none() {
            return None;
        }
        self.index.get(key).map(|&i| self.nodes[i].entity)
    }

    /// Register a node and return its position.
    ///
    /// A key that is already registered keeps its first node; the new
    /// node's pending links are appended to it.
    pub fn insert(&mut self, node: ResourceNode) -> usize {
        if node.key.raw_id.is_some() {
            if let Some(&existing) = self.index.get(&node.key) {
                self.nodes[existing].pending.extend(node.pending);
                return existing;
            }
            self.index.insert(node.key.clone(), self.nodes.len());
        }
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Get a node by position.
    pub fn get(&self, position: usize) -> Option<&ResourceNode> {
        self.nodes.get(position)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of relationship references still to resolve.
    pub fn pending_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|n| n.pending.iter())
            .map(|(_, link)| link.targets().len())
            .sum()
    }
}
