//! Rule compilation and field assignment errors.

use thiserror::Error;

/// Result type for rule compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while compiling rule and rename declarations.
///
/// All of them are fatal to the mapping call and surface before any
/// document processing.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Malformed rules: {message}")]
    MalformedRules { message: String },

    #[error("Missing scope for {wire_type}")]
    MissingScope { wire_type: String },

    #[error("Whitelist entries for {wire_type} must be plain names, got {entry}")]
    InvalidEntry { wire_type: String, entry: String },

    #[error("Whitelisted field {field} of {wire_type} is also a scope field")]
    ScopeCollision { wire_type: String, field: String },

    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    #[error("Unknown field: {field} on type {domain_type}")]
    UnknownField { domain_type: String, field: String },
}

impl CompileError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRules {
            message: message.into(),
        }
    }

    pub fn missing_scope(wire_type: impl Into<String>) -> Self {
        Self::MissingScope {
            wire_type: wire_type.into(),
        }
    }

    pub fn invalid_entry(wire_type: impl Into<String>, entry: impl Into<String>) -> Self {
        Self::InvalidEntry {
            wire_type: wire_type.into(),
            entry: entry.into(),
        }
    }

    pub fn scope_collision(wire_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ScopeCollision {
            wire_type: wire_type.into(),
            field: field.into(),
        }
    }

    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    pub fn unknown_field(domain_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            domain_type: domain_type.into(),
            field: field.into(),
        }
    }

    /// True for malformed or insecure declarations, as opposed to names
    /// that do not resolve against the domain registry.
    pub fn is_rules_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRules { .. }
                | Self::MissingScope { .. }
                | Self::InvalidEntry { .. }
                | Self::ScopeCollision { .. }
        )
    }
}

/// Result type for typed field assignment.
pub type AssignResult<T> = Result<T, AssignError>;

/// Errors raised by the typed field setters of a `DomainType`.
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("Unknown field: {field} on type {domain_type}")]
    UnknownField { domain_type: String, field: String },

    #[error("Type mismatch on {domain_type}.{field}: expected {expected}, got {actual}")]
    TypeMismatch {
        domain_type: String,
        field: String,
        expected: String,
        actual: String,
    },
}

impl AssignError {
    pub fn unknown_field(domain_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            domain_type: domain_type.into(),
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        domain_type: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            domain_type: domain_type.into(),
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
