//! `beyond`: command-line shell for the BeyondTheBoard session protocol.
//!
//! Each invocation behaves like one browser tab over a shared, persisted
//! session slot: a logout from one shell is only noticed by another on its
//! next `visit`.
//!
//! # Usage
//!
//! ```
//! beyond login --email student1@gmail.com --password student1 --role student
//! beyond visit /student-dashboard
//! beyond logout
//! ```

mod app;

use std::{
  io,
  path::{Path, PathBuf},
  process::ExitCode,
};

use anyhow::{Context, Result};
use app::{App, Command};
use beyond_core::{
  directory::CredentialDirectory,
  login::LoginRequest,
  register::RegistrationForm,
  session::{DEFAULT_SESSION_KEY, Session},
};
use beyond_store_sqlite::SqliteStorage;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "beyond", about = "Session shell for the BeyondTheBoard academy")]
struct Args {
  /// SQLite file holding the session slot.
  #[arg(
    long,
    env = "BEYOND_STORAGE",
    default_value = "~/.local/share/beyond/session.db"
  )]
  storage: PathBuf,

  /// TOML credential directory (`[[students]]`, `[[coaches]]`, `[[admins]]`).
  /// The built-in mock directory is used when omitted.
  #[arg(long, env = "BEYOND_DIRECTORY", value_name = "FILE")]
  directory: Option<PathBuf>,

  /// Storage key of the session slot.
  #[arg(long, default_value = DEFAULT_SESSION_KEY)]
  session_key: String,

  #[command(subcommand)]
  command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
  /// Log in against the credential directory.
  Login {
    #[arg(long, default_value = "")]
    email:    String,
    #[arg(long, default_value = "")]
    password: String,
    /// student, coach or admin.
    #[arg(long)]
    role:     String,
  },
  /// Validate a sign-up form.
  Register {
    #[arg(long, default_value = "")]
    name:             String,
    #[arg(long, default_value = "")]
    email:            String,
    #[arg(long, default_value = "")]
    password:         String,
    #[arg(long, default_value = "")]
    confirm_password: String,
    #[arg(long)]
    agree_to_terms:   bool,
  },
  /// Enter a view, running the role guard if it is protected.
  Visit { path: String },
  /// Clear the session slot.
  Logout,
  /// Print the stored principal.
  Whoami,
}

impl From<Cmd> for Command {
  fn from(cmd: Cmd) -> Self {
    match cmd {
      Cmd::Login {
        email,
        password,
        role,
      } => Command::Login(LoginRequest::new(email, password, role)),
      Cmd::Register {
        name,
        email,
        password,
        confirm_password,
        agree_to_terms,
      } => Command::Register(RegistrationForm {
        name,
        email,
        password,
        confirm_password,
        agree_to_terms,
      }),
      Cmd::Visit { path } => Command::Visit(path),
      Cmd::Logout => Command::Logout,
      Cmd::Whoami => Command::Whoami,
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let directory = match &args.directory {
    Some(path) => load_directory(path)?,
    None => CredentialDirectory::seed(),
  };

  let storage_path = expand_tilde(&args.storage);
  if let Some(parent) = storage_path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating {}", parent.display()))?;
  }
  let storage = SqliteStorage::open(&storage_path)
    .with_context(|| format!("opening session storage {}", storage_path.display()))?;
  let session = Session::with_key(storage, args.session_key);

  let ok = App::new(&directory, &session).run(args.command.into(), &mut io::stdout())?;
  Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn load_directory(path: &Path) -> Result<CredentialDirectory> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading directory file {}", path.display()))?;
  let directory: CredentialDirectory =
    toml::from_str(&raw).context("parsing directory file")?;
  directory.validate()?;
  Ok(directory)
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
