//! Mapper error types.

use docmap_core::RepositoryError;
use docmap_registry::{AssignError, CompileError};
use thiserror::Error;

/// Result type for mapping operations.
pub type MapperResult<T> = Result<T, MapperError>;

/// Errors that abort a mapping call. No partial result is ever returned.
#[derive(Debug, Error)]
pub enum MapperError {
    /// Rule or rename declarations are malformed, insecure or unresolvable.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A scoped lookup found nothing, or a temporary id was never declared.
    #[error("Couldn't find {domain_type} with id={id}")]
    NotFound { domain_type: String, id: String },

    #[error("Type mismatch on {domain_type}.{field}: expected {expected}, got {actual}")]
    TypeMismatch {
        domain_type: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Unknown field: {field} on type {domain_type}")]
    UnknownField { domain_type: String, field: String },

    #[error(transparent)]
    Repository(RepositoryError),
}

impl MapperError {
    pub fn not_found(domain_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            domain_type: domain_type.into(),
            id: id.into(),
        }
    }

    /// True for rule declaration problems (as opposed to unresolvable names).
    pub fn is_rules_error(&self) -> bool {
        matches!(self, Self::Compile(e) if e.is_rules_error())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<AssignError> for MapperError {
    fn from(e: AssignError) -> Self {
        match e {
            AssignError::UnknownField { domain_type, field } => {
                Self::UnknownField { domain_type, field }
            }
            AssignError::TypeMismatch {
                domain_type,
                field,
                expected,
                actual,
            } => Self::TypeMismatch {
                domain_type,
                field,
                expected,
                actual,
            },
        }
    }
}

impl From<RepositoryError> for MapperError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound { domain_type, id } => Self::NotFound { domain_type, id },
            other => Self::Repository(other),
        }
    }
}

/// Errors raised while loading a `MapperConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid mapper configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
