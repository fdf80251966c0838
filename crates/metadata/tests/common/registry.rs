//! Disposable registry store for tests.

use bodega_metadata::{MetadataResult, RegistryStore, SqliteStore};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tempfile::TempDir;

/// A test registry store backed by a temp directory that is removed on
/// drop. Each test constructs its own; nothing is shared between tests.
pub struct TestRegistry {
    store: Arc<SqliteStore>,
    _temp_dir: TempDir,
}

impl TestRegistry {
    /// Create a fresh store with the schema bootstrapped.
    pub async fn new() -> MetadataResult<Self> {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let store = SqliteStore::new(&db_path, None).await?;
        Ok(Self {
            store: Arc::new(store),
            _temp_dir: temp_dir,
        })
    }

    /// Get the store as the combined trait object.
    pub fn store(&self) -> Arc<dyn RegistryStore> {
        self.store.clone()
    }

    /// Get the raw connection pool for row-level assertions.
    #[allow(dead_code)]
    pub fn pool(&self) -> &Pool<Sqlite> {
        self.store.pool()
    }
}
