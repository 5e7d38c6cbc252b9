//! Tests for `SqliteStorage` and the session protocol running on top of it.

use beyond_core::{
  Error,
  directory::CredentialDirectory,
  guard::{Access, guard},
  login::{LoginRequest, login},
  logout::logout,
  role::Role,
  route::Requirement,
  session::{Session, SessionStore},
  storage::SlotStorage,
};

use crate::SqliteStorage;

fn storage() -> SqliteStorage {
  SqliteStorage::open_in_memory().expect("in-memory store")
}

// ─── Slots ───────────────────────────────────────────────────────────────────

#[test]
fn missing_key_returns_none() {
  let s = storage();
  assert_eq!(s.get_item("user").unwrap(), None);
}

#[test]
fn set_then_get() {
  let s = storage();
  s.set_item("user", "{}").unwrap();
  assert_eq!(s.get_item("user").unwrap().as_deref(), Some("{}"));
}

#[test]
fn set_overwrites() {
  let s = storage();
  s.set_item("user", "one").unwrap();
  s.set_item("user", "two").unwrap();
  assert_eq!(s.get_item("user").unwrap().as_deref(), Some("two"));
}

#[test]
fn remove_is_idempotent() {
  let s = storage();
  s.set_item("user", "x").unwrap();
  s.remove_item("user").unwrap();
  s.remove_item("user").unwrap();
  assert_eq!(s.get_item("user").unwrap(), None);
}

#[test]
fn keys_are_independent() {
  let s = storage();
  s.set_item("user", "a").unwrap();
  s.set_item("theme", "dark").unwrap();
  s.remove_item("user").unwrap();
  assert_eq!(s.get_item("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn clones_share_contents() {
  let s = storage();
  let other = s.clone();
  s.set_item("user", "shared").unwrap();
  assert_eq!(other.get_item("user").unwrap().as_deref(), Some("shared"));
}

// ─── File persistence ────────────────────────────────────────────────────────

fn temp_db(name: &str) -> std::path::PathBuf {
  let path = std::env::temp_dir().join(format!(
    "beyond-{name}-{}.db",
    std::process::id()
  ));
  let _ = std::fs::remove_file(&path);
  path
}

#[test]
fn session_survives_reopen() {
  let path = temp_db("reopen");
  {
    let session = Session::new(SqliteStorage::open(&path).unwrap());
    login(
      &CredentialDirectory::seed(),
      &session,
      &LoginRequest::new("student1@gmail.com", "student1", "student"),
    )
    .unwrap();
  }

  let session = Session::new(SqliteStorage::open(&path).unwrap());
  let principal = session.get().unwrap().expect("persisted principal");
  assert_eq!(principal.name, "Alex Morgan");
  assert_eq!(principal.role, Role::Student);
  assert!(principal.authenticated);
  let _ = std::fs::remove_file(&path);
}

#[test]
fn logout_in_one_handle_is_seen_on_next_check_in_another() {
  let path = temp_db("tabs");
  let tab_a = Session::new(SqliteStorage::open(&path).unwrap());
  let tab_b = Session::new(SqliteStorage::open(&path).unwrap());

  login(
    &CredentialDirectory::seed(),
    &tab_a,
    &LoginRequest::new("coach1@gmail.com", "coach1", "coach"),
  )
  .unwrap();
  let rendered = guard(&tab_b, Requirement::Role(Role::Coach));
  assert!(rendered.is_granted());

  logout(&tab_a).unwrap();
  // Tab B keeps whatever it rendered until it checks again.
  assert_eq!(rendered.principal().map(|p| p.role), Some(Role::Coach));
  assert!(matches!(
    guard(&tab_b, Requirement::Role(Role::Coach)),
    Access::Denied {
      reason: Error::SessionAbsent,
      ..
    }
  ));
  let _ = std::fs::remove_file(&path);
}
