//! HTTP surface for the BeyondTheBoard session shell.
//!
//! Exposes an axum [`Router`] driving the login protocol, the role guard and
//! logout over a single process-wide session slot backed by any
//! [`SlotStorage`].

pub mod error;
pub mod handlers;
pub mod view;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use beyond_core::{
  directory::CredentialDirectory,
  session::{DEFAULT_SESSION_KEY, Session},
  storage::SlotStorage,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{dashboard, session};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `BEYOND_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// `:memory:` keeps the slot in-process; anything else is a SQLite file.
  pub storage_path: PathBuf,
  #[serde(default = "default_session_key")]
  pub session_key:  String,
  #[serde(default = "CredentialDirectory::seed")]
  pub directory:    CredentialDirectory,
}

fn default_session_key() -> String { DEFAULT_SESSION_KEY.to_string() }

impl ServerConfig {
  pub fn in_memory(&self) -> bool { self.storage_path.as_os_str() == ":memory:" }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub session:   Arc<Session<S>>,
  pub directory: Arc<CredentialDirectory>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      session:   Arc::clone(&self.session),
      directory: Arc::clone(&self.directory),
    }
  }
}

impl<S: SlotStorage> AppState<S> {
  pub fn new(storage: S, config: &ServerConfig) -> Self {
    Self {
      session:   Arc::new(Session::with_key(storage, config.session_key.clone())),
      directory: Arc::new(config.directory.clone()),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the session shell.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SlotStorage + 'static,
{
  Router::new()
    .route("/login",             post(session::login_handler::<S>))
    .route("/logout",            post(session::logout_handler::<S>))
    .route("/register",          post(session::register_handler))
    .route("/session",           get(session::current::<S>))
    .route("/dashboard",         get(dashboard::any))
    .route("/student-dashboard", get(dashboard::student))
    .route("/coach-dashboard",   get(dashboard::coach))
    .route("/admin-dashboard",   get(dashboard::admin))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
