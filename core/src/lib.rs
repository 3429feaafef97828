//! Docmap Core Types
//!
//! This crate provides the foundational types used throughout docmap:
//! - Entity handles and the temporary-identifier convention
//! - Value types (the Value enum with scalar, reference and container values)
//! - Domain entities and the per-operation entity arena
//! - Field-level validation failures
//! - The persistence collaborator (`Repository`) and its error type

mod entity;
mod error;
mod id;
mod repository;
mod validation;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use repository::*;
pub use validation::*;
pub use value::*;
