//! Shared fixtures for repository integration tests.
//!
//! Each test gets its own SQLite file in a temporary directory, with the
//! tables built from the SeaORM entities.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema, Statement};
use tempfile::TempDir;

use common::{AppResult, DatabaseConfig};
use records::infra::{ConnectionProvider, Database};
use records::repository::entities::{CourseEntity, GradeEntity, UserEntity};

/// Provider that counts the connections it hands out.
pub struct CountingProvider {
    inner: Database,
    acquired: AtomicUsize,
}

impl CountingProvider {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionProvider for CountingProvider {
    async fn acquire(&self) -> AppResult<DatabaseConnection> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.inner.acquire().await
    }
}

pub struct TestDb {
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
    pub provider: Arc<CountingProvider>,
}

impl TestDb {
    pub fn connections(&self) -> Arc<dyn ConnectionProvider> {
        self.provider.clone()
    }

    /// Run raw SQL, bypassing the repositories.
    pub async fn execute_raw(&self, sql: &str) {
        let conn = self.provider.inner.acquire().await.unwrap();
        conn.execute(Statement::from_string(conn.get_database_backend(), sql.to_string()))
            .await
            .unwrap();
        conn.close().await.unwrap();
    }
}

/// Create an empty records database with the `users`, `courses` and
/// `grades` tables.
pub async fn setup() -> TestDb {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("records.db").display());
    let database = Database::new(DatabaseConfig::new(url)).unwrap();

    let conn = database.acquire().await.unwrap();
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    for stmt in [
        schema.create_table_from_entity(UserEntity),
        schema.create_table_from_entity(CourseEntity),
        schema.create_table_from_entity(GradeEntity),
    ] {
        conn.execute(backend.build(&stmt)).await.unwrap();
    }
    conn.close().await.unwrap();

    TestDb {
        _dir: dir,
        provider: Arc::new(CountingProvider {
            inner: database,
            acquired: AtomicUsize::new(0),
        }),
    }
}
