//! Database Connection and Setup
//!
//! SQLite-backed key-value storage, the on-device slot store.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

fn storage_err(e: rusqlite::Error) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// SQLite implementation of the key-value store
#[derive(Clone)]
pub struct SqliteKvStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKvStore {
    /// Open (or create) the database file and run migrations
    pub fn open(db_path: &Path) -> DomainResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DomainError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
            }
        }
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Storage(format!("Failed to open db: {}", e)))?;
        Self::with_connection(conn)
    }

    /// Private database that lives as long as the store
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory().map_err(storage_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> DomainResult<Self> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )
    .map_err(storage_err)?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(storage_err)
    }

    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(storage_err)?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(storage_err)?;
        Ok(())
    }
}
