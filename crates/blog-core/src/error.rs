//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// A required key was absent from the request payload.
    pub fn missing_field(name: &str) -> Self {
        Self::Validation(format!("missing field `{name}`"))
    }

    /// A key that maps to a NOT NULL column was sent as JSON `null`.
    pub fn null_field(name: &str) -> Self {
        Self::Validation(format!("field `{name}` must not be null"))
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
