//! Connection provider tests.

use common::{AppError, DatabaseConfig};
use records::infra::{ConnectionProvider, Database};
use tempfile::TempDir;

#[tokio::test]
async fn test_ping_sqlite_file() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("ping.db").display());
    let database = Database::new(DatabaseConfig::new(url)).unwrap();

    database.ping().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_endpoint_is_storage_error() {
    let mut config = DatabaseConfig::new("mysql://127.0.0.1:1/records")
        .with_credentials("records", "records");
    config.connect_timeout_secs = 1;
    let database = Database::new(config).unwrap();

    let err = database.acquire().await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
    assert!(database.ping().await.is_err());
}

#[test]
fn test_unknown_driver_is_config_error() {
    let err = Database::new(DatabaseConfig::new("oracle://localhost:1521/records")).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}
