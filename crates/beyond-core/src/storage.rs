//! The `SlotStorage` trait: a string-keyed persistent slot store.
//!
//! This is the browser-local storage analogue. Backends live outside this
//! crate (e.g. `beyond-store-sqlite`); [`MemoryStorage`] is the in-process
//! implementation.

use std::{collections::HashMap, convert::Infallible, sync::Mutex};

/// Abstraction over a persistent key/value slot store.
///
/// All operations are synchronous and complete before returning. There is no
/// change notification: another handle on the same backing store observes a
/// write only on its next read.
pub trait SlotStorage: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the raw value stored under `key`, if any.
  fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Store `value` under `key`, replacing any previous value.
  fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

  /// Delete `key`. Removing an absent key is not an error.
  fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

/// Process-local [`SlotStorage`]; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self { Self::default() }

  fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
    // A panicked writer cannot leave a half-written String behind.
    self.items.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl SlotStorage for MemoryStorage {
  type Error = Infallible;

  fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
    Ok(self.items().get(key).cloned())
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
    self.items().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
    self.items().remove(key);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_get_remove() {
    let s = MemoryStorage::new();
    assert_eq!(s.get_item("user").unwrap(), None);
    s.set_item("user", "a").unwrap();
    s.set_item("user", "b").unwrap();
    assert_eq!(s.get_item("user").unwrap().as_deref(), Some("b"));
    s.remove_item("user").unwrap();
    s.remove_item("user").unwrap();
    assert_eq!(s.get_item("user").unwrap(), None);
  }
}
