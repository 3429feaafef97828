//! Docmap Store
//!
//! `MemoryStore`: an in-memory `Repository` with one table per domain type,
//! sequential ids and presence validations.

mod store;
mod validation;

pub use store::MemoryStore;
pub use validation::Validation;
