//! Common error types for docmap.

use thiserror::Error;

/// Errors reported by the persistence collaborator.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity matched the id within the given scope.
    #[error("Couldn't find {domain_type} with id={id}")]
    NotFound { domain_type: String, id: String },

    /// The entity handed to the repository is not part of the entity set.
    #[error("Unknown entity handle: {0}")]
    UnknownHandle(crate::EntityHandle),

    /// Failure inside the backing store.
    #[error("Repository failure: {message}")]
    Backend { message: String },
}

impl RepositoryError {
    pub fn not_found(domain_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            domain_type: domain_type.into(),
            id: id.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
