//! Docmap Graph
//!
//! In-memory registry of the resources built from one document, keyed by
//! `(wire type, raw id)`. Backs the two-phase build/link resolution.

mod graph;
mod node;

pub use graph::ResourceGraph;
pub use node::{Origin, PendingLink, ResourceNode};
