//! Infrastructure layer - database connections.

mod db;

pub use db::{compiled_drivers, ConnectionProvider, Database, ScopedConnection};

#[cfg(any(test, feature = "test-utils"))]
pub use db::MockConnectionProvider;
