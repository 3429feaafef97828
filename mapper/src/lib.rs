//! Docmap Mapper
//!
//! Map a JSON:API document onto a graph of domain entities.
//!
//! Responsibilities:
//! - Build or look up one entity per resource, applying whitelisted attributes
//! - Force scope fields on new entities and filter lookups by scope
//! - Resolve relationships across the whole document, temporary ids included
//! - Gate persistence on validation and report failures in JSON:API form
//!
//! # Module Structure
//!
//! - `mapper` - `DocumentMapper`, the compiled entry point
//! - `ops/` - Build, link and save passes
//! - `result` - The `Mapping` produced by a mapping call
//! - `report` - JSON:API error documents
//! - `config` - Serde-loadable mapper configuration
//! - `error` - Error types for mapping failures

mod config;
mod error;
mod mapper;
mod ops;
mod report;
mod result;

pub use config::MapperConfig;
pub use error::{ConfigError, MapperError, MapperResult};
pub use mapper::{map, map_unsafe, DocumentMapper};
pub use ops::{save_all, validate_all};
pub use report::{error_code, error_report, ErrorDocument, ErrorMeta, ErrorObject, ErrorSource};
pub use result::{MappedResource, Mapping, Primary};
