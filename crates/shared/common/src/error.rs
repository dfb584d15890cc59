//! Unified error handling for the data-access layer.
//!
//! Storage failures are carried unmodified as the error source so callers
//! can inspect the driver error. Absence of a row is never an error here:
//! repositories return `Option` for single lookups.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Storage access
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    // Row mapping
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl AppError {
    /// Get error code for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InvalidRecord(_) => "INVALID_RECORD",
        }
    }

    /// True for failures of the storage backend itself (connectivity, SQL,
    /// constraint violations, driver misconfiguration).
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Config(_))
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownRole(_) => AppError::InvalidRecord(err.to_string()),
        }
    }
}

impl From<std::convert::Infallible> for AppError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
