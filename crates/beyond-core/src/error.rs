//! Error types for `beyond-core`.

use thiserror::Error;

use crate::{role::Role, route::Notice};

/// A required-field check failed before any directory lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("missing required fields")]
  MissingFields,

  #[error("passwords do not match")]
  PasswordMismatch,

  #[error("terms and conditions not accepted")]
  TermsNotAccepted,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  /// Deliberately carries no detail: the caller must not learn whether the
  /// email exists.
  #[error("invalid credentials")]
  Authentication,

  #[error("no session present")]
  SessionAbsent,

  #[error("session does not satisfy required role {required}")]
  SessionMismatch { required: Role },

  #[error("stored session is corrupt: {0}")]
  SessionCorrupt(#[source] serde_json::Error),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("invalid credential directory: {0}")]
  Directory(String),
}

impl Error {
  /// Wrap a backend error from a [`crate::storage::SlotStorage`].
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(err))
  }

  /// The user-facing notice for this error.
  pub fn notice(&self) -> Notice {
    match self {
      Self::Validation(ValidationError::MissingFields) => {
        Notice::error("Please fill in all fields")
      }
      Self::Validation(ValidationError::PasswordMismatch) => {
        Notice::error("Passwords do not match")
      }
      Self::Validation(ValidationError::TermsNotAccepted) => {
        Notice::error("You must agree to the terms and conditions")
      }
      Self::Authentication => Notice::error("Invalid credentials"),
      Self::SessionAbsent | Self::SessionCorrupt(_) => {
        Notice::error("Please login to access the dashboard")
      }
      Self::SessionMismatch { required } => Notice::error(format!(
        "Access denied. Please login as {}.",
        required.denial_label()
      )),
      Self::Storage(_) | Self::Directory(_) => {
        Notice::error("Something went wrong. Please try again.")
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
