//! SQLite backend for the session slot.
//!
//! Provides [`SqliteStorage`], a file-backed
//! [`SlotStorage`](beyond_core::storage::SlotStorage). Every handle opened on
//! the same file shares its contents, the way browser tabs share local
//! storage.

mod schema;
mod storage;

pub mod error;

pub use error::{Error, Result};
pub use storage::SqliteStorage;

#[cfg(test)]
mod tests;
