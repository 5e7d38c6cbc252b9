//! beyond-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `BEYOND_*`
//! environment variables, opens the session slot storage, and serves the
//! session shell over HTTP.
//!
//! ```toml
//! host         = "127.0.0.1"
//! port         = 8080
//! storage_path = "~/.local/share/beyond/session.db"
//!
//! [[directory.students]]
//! email    = "student1@gmail.com"
//! password = "student1"
//! name     = "Alex Morgan"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use beyond_core::storage::{MemoryStorage, SlotStorage};
use beyond_store_sqlite::SqliteStorage;
use beyond_web::{AppState, ServerConfig};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "BeyondTheBoard session server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("storage_path", ":memory:")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("BEYOND"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  server_cfg
    .directory
    .validate()
    .context("credential directory rejected")?;

  if server_cfg.in_memory() {
    tracing::info!("session slot kept in memory");
    serve(MemoryStorage::new(), &server_cfg).await
  } else {
    let store_path = expand_tilde(&server_cfg.storage_path);
    if let Some(parent) = store_path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {parent:?}"))?;
    }
    let storage = SqliteStorage::open(&store_path)
      .with_context(|| format!("failed to open store at {store_path:?}"))?;
    tracing::info!(path = ?store_path, "session slot persisted to sqlite");
    serve(storage, &server_cfg).await
  }
}

async fn serve<S>(storage: S, cfg: &ServerConfig) -> anyhow::Result<()>
where
  S: SlotStorage + 'static,
{
  let app = beyond_web::router(AppState::new(storage, cfg));
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
