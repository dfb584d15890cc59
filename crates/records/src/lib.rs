//! Records Library
//!
//! Data access for users, courses and grades. Each store maps its
//! operations one-to-one onto single SQL statements and opens a fresh
//! connection per call.
//!
//! ```no_run
//! use records::infra::Database;
//! use records::repository::{UserRepository, UserStore};
//!
//! # async fn demo() -> common::AppResult<()> {
//! let connections = Database::from_env()?.into_provider();
//! let users = UserStore::new(connections);
//! let found = users.find_by_email("john.doe@example.com").await?;
//! # let _ = found;
//! # Ok(())
//! # }
//! ```

pub mod infra;
pub mod repository;

pub use infra::{ConnectionProvider, Database};
pub use repository::{
    CourseRepository, CourseStore, CrudRepository, GradeRepository, GradeStore, UserRepository,
    UserStore,
};
