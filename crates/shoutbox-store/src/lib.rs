//! Best-effort message store.
//!
//! One long-lived connection behind a mutex, opened at startup. When the
//! store cannot be opened, or a later call against it fails, the adapter
//! degrades instead of failing the request: writes are dropped and reads
//! return nothing. A fetch sees every insert that completed before it;
//! all calls go through the single shared connection.

pub mod migrations;
pub mod models;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rusqlite::Connection;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::StoredMessage;

/// How long a query may wait on a locked store before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub struct MessageStore {
    inner: Option<Arc<StoreInner>>,
}

struct StoreInner {
    conn: Mutex<Connection>,
}

impl MessageStore {
    /// Open the store at `path`, probe it, and run migrations. Any failure
    /// leaves the adapter degraded rather than aborting startup.
    pub fn connect(path: &str) -> Self {
        match StoreInner::open(path) {
            Ok(inner) => {
                info!("Message store ready at {}", path);
                Self {
                    inner: Some(Arc::new(inner)),
                }
            }
            Err(e) => {
                warn!("Could not open message store at {}: {}", path, e);
                Self { inner: None }
            }
        }
    }

    /// A store with no backing collection: writes are dropped and reads
    /// come back empty.
    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.inner.is_none()
    }

    /// Persist one message. Skipped silently when either field is empty or
    /// the store is degraded; a failed write is logged and absorbed.
    pub async fn insert(&self, text: &str, timestamp: &str) {
        if text.is_empty() || timestamp.is_empty() {
            return;
        }
        let Some(inner) = self.inner.clone() else {
            return;
        };

        let text = text.to_owned();
        let timestamp = timestamp.to_owned();
        match tokio::task::spawn_blocking(move || inner.insert(&text, &timestamp)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Store insert failed: {}", e),
            Err(e) => warn!("Store insert task failed: {}", e),
        }
    }

    /// The `limit` most recent messages, newest first. Empty when degraded
    /// or when the call fails.
    pub async fn fetch_recent(&self, limit: u32) -> Vec<StoredMessage> {
        let Some(inner) = self.inner.clone() else {
            return Vec::new();
        };

        match tokio::task::spawn_blocking(move || inner.fetch_recent(limit)).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => {
                warn!("Store fetch failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                warn!("Store fetch task failed: {}", e);
                Vec::new()
            }
        }
    }
}

impl StoreInner {
    fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Liveness probe before the first real query.
        conn.query_row("SELECT 1", [], |_| Ok(()))?;

        migrations::run(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn insert(&self, text: &str, timestamp: &str) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO messages (body, posted_at) VALUES (?1, ?2)",
            (text, timestamp),
        )?;
        Ok(())
    }

    fn fetch_recent(&self, limit: u32) -> Result<Vec<StoredMessage>, StoreError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT body, posted_at FROM messages ORDER BY id DESC LIMIT ?1")?;

        let rows = stmt
            .query_map([limit], |row| {
                Ok(StoredMessage {
                    text: row.get(0)?,
                    timestamp: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))
    }
}
