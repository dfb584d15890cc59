//! Domain-level errors.
//!
//! These errors represent values that do not fit the domain model.
//! They are independent of infrastructure concerns (database, configuration).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown user role value
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl DomainError {
    /// Create an unknown role error
    pub fn unknown_role(role: impl Into<String>) -> Self {
        DomainError::UnknownRole(role.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
