use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::kv_entry;
use crate::repositories::KvRepository;

/// Special database path that keeps everything in memory
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Local key-value storage manager
#[derive(Clone, Debug)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the SQLite database at `path`; `:memory:` keeps it in RAM
    pub async fn open(path: &Path) -> Result<Self> {
        let database_url = if path.as_os_str() == IN_MEMORY_PATH {
            "sqlite::memory:".to_string()
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
                }
            }
            format!("sqlite://{}?mode=rwc", path.display())
        };

        // A single long-lived connection: an in-memory database lives only as
        // long as its connection does.
        let mut options = ConnectOptions::new(database_url);
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open local storage at {}", path.display()))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        info!("💾 Local storage ready at {}", path.display());

        Ok(storage)
    }

    /// Open a throwaway in-memory store
    pub async fn in_memory() -> Result<Self> {
        Self::open(Path::new(IN_MEMORY_PATH)).await
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(kv_entry::Entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .context("Failed to create kv_entries table")?;
        Ok(())
    }

    /// Read the value stored under `key`
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        KvRepository::get_value(&self.conn, key).await
    }

    /// Write `value` under `key`, replacing any previous value
    pub async fn put(&self, key: &str, value: &str) -> Result<()> {
        KvRepository::put(&self.conn, key, value).await
    }

    /// Remove whatever is stored under `key`
    pub async fn remove(&self, key: &str) -> Result<()> {
        KvRepository::delete(&self.conn, key).await
    }

    /// Close the underlying connection; later calls fail as storage unavailable
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}
