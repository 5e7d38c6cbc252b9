//! [`SqliteStorage`]: the SQLite implementation of [`SlotStorage`].

use std::{
  path::Path,
  sync::{Arc, Mutex, MutexGuard},
  time::Duration,
};

use beyond_core::storage::SlotStorage;
use rusqlite::{Connection, OptionalExtension as _};

use crate::{Error, Result, schema::SCHEMA};

// ─── Storage ─────────────────────────────────────────────────────────────────

/// A slot store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Separate
/// `open` calls on the same path get separate connections that see each
/// other's committed writes.
#[derive(Clone)]
pub struct SqliteStorage {
  conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = Connection::open(path)?;
    // Concurrent shells on one file wait briefly instead of failing.
    conn.busy_timeout(Duration::from_secs(5))?;
    Self::init(conn)
  }

  /// Open an in-memory store, useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    Self::init(Connection::open_in_memory()?)
  }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(SCHEMA)?;
    Ok(Self {
      conn: Arc::new(Mutex::new(conn)),
    })
  }

  fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
    self.conn.lock().map_err(|_| Error::Poisoned)
  }
}

impl SlotStorage for SqliteStorage {
  type Error = Error;

  fn get_item(&self, key: &str) -> Result<Option<String>> {
    let value = self
      .conn()?
      .query_row(
        "SELECT value FROM slots WHERE key = ?1",
        rusqlite::params![key],
        |r| r.get(0),
      )
      .optional()?;
    Ok(value)
  }

  fn set_item(&self, key: &str, value: &str) -> Result<()> {
    self.conn()?.execute(
      "INSERT INTO slots (key, value) VALUES (?1, ?2)
       ON CONFLICT(key) DO UPDATE SET
         value = excluded.value,
         updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
      rusqlite::params![key, value],
    )?;
    tracing::trace!(key, "slot written");
    Ok(())
  }

  fn remove_item(&self, key: &str) -> Result<()> {
    let removed = self
      .conn()?
      .execute("DELETE FROM slots WHERE key = ?1", rusqlite::params![key])?;
    tracing::trace!(key, removed, "slot removed");
    Ok(())
  }
}
