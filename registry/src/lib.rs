//! Docmap Registry
//!
//! Compile-time knowledge the mapper works from:
//! - `DomainRegistry`: the domain types and their typed field setters
//! - `RenameTable`: wire vocabulary <-> domain vocabulary
//! - `RuleCompiler`: per-type whitelist and scope declarations -> `Ruleset`
//!
//! Everything here is built once and immutable afterwards.

mod builder;
mod error;
mod naming;
mod registry;
mod rename;
mod rules;
mod types;

pub use builder::{DomainRegistryBuilder, DomainTypeBuilder, RegistryError};
pub use error::{AssignError, AssignResult, CompileError, CompileResult};
pub use naming::{default_domain_type_name, singularize};
pub use registry::DomainRegistry;
pub use rename::RenameTable;
pub use rules::{RuleCompiler, Ruleset, TypeDescriptor};
pub use types::{DomainType, FieldDef, FieldKind, ValueType};
