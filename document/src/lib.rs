//! Docmap Document
//!
//! Explicit model of the JSON:API subset the mapper reads:
//! - `Document`: primary `data` plus `included`
//! - `Resource`: one typed resource object
//! - `ResourceIdentifier` / `RelationshipData`: relationship references
//!
//! Parsing is lenient. Malformed fragments are dropped at this boundary so
//! later stages never probe raw JSON.

mod document;
mod resource;

pub use document::{Document, PrimaryData};
pub use resource::{RelationshipData, Resource, ResourceIdentifier};
