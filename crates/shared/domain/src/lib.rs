//! Domain layer - Core entities of the academic records store.
//!
//! Plain value types with no infrastructure dependencies.
//! Referential integrity between them is left to the storage schema.

pub mod constants;
pub mod course;
pub mod error;
pub mod grade;
pub mod user;

/// Numeric identity assigned by storage on insertion
pub type Id = i32;

pub use constants::*;
pub use course::Course;
pub use error::{DomainError, DomainResult};
pub use grade::Grade;
pub use user::{User, UserRole};
