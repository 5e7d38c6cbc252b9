//! The session store: a single slot holding at most one [`Principal`].

use crate::{Error, Result, principal::Principal, storage::SlotStorage};

/// Storage key used when none is configured.
pub const DEFAULT_SESSION_KEY: &str = "user";

/// Narrow interface over the single session slot.
///
/// Written only by a successful login, cleared only by logout, read by every
/// protected view.
pub trait SessionStore: Send + Sync {
  /// The stored principal, `None` if the slot is empty.
  ///
  /// Returns [`Error::SessionCorrupt`] if the slot holds something that does
  /// not parse as a principal.
  fn get(&self) -> Result<Option<Principal>>;

  /// Overwrite the slot.
  fn set(&self, principal: &Principal) -> Result<()>;

  /// Empty the slot entirely.
  fn clear(&self) -> Result<()>;
}

/// A [`SessionStore`] persisted as JSON under one key of a [`SlotStorage`].
#[derive(Debug)]
pub struct Session<S> {
  storage: S,
  key:     String,
}

impl<S: SlotStorage> Session<S> {
  /// Use `storage` with the default `"user"` key.
  pub fn new(storage: S) -> Self { Self::with_key(storage, DEFAULT_SESSION_KEY) }

  pub fn with_key(storage: S, key: impl Into<String>) -> Self {
    Self {
      storage,
      key: key.into(),
    }
  }

  pub fn key(&self) -> &str { &self.key }

  /// The underlying slot storage.
  pub fn storage(&self) -> &S { &self.storage }
}

impl<S: SlotStorage> SessionStore for Session<S> {
  fn get(&self) -> Result<Option<Principal>> {
    let Some(raw) = self.storage.get_item(&self.key).map_err(Error::storage)?
    else {
      return Ok(None);
    };
    serde_json::from_str(&raw)
      .map(Some)
      .map_err(Error::SessionCorrupt)
  }

  fn set(&self, principal: &Principal) -> Result<()> {
    let raw = serde_json::to_string(principal).map_err(Error::SessionCorrupt)?;
    self
      .storage
      .set_item(&self.key, &raw)
      .map_err(Error::storage)
  }

  fn clear(&self) -> Result<()> {
    self.storage.remove_item(&self.key).map_err(Error::storage)
  }
}
