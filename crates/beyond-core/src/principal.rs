//! Principal: the identity held in the session slot.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated identity produced by a successful login.
///
/// Immutable once constructed: a new login replaces the stored principal
/// rather than mutating it. The persisted layout uses `isLoggedIn` for the
/// authenticated flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
  pub name:          String,
  pub email:         String,
  pub role:          Role,
  #[serde(rename = "isLoggedIn")]
  pub authenticated: bool,
}

impl Principal {
  /// Build an authenticated principal.
  pub fn authenticated(
    name: impl Into<String>,
    email: impl Into<String>,
    role: Role,
  ) -> Self {
    Self {
      name: name.into(),
      email: email.into(),
      role,
      authenticated: true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn persisted_layout() {
    let p = Principal::authenticated("Alex Morgan", "student1@gmail.com", Role::Student);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "name": "Alex Morgan",
        "email": "student1@gmail.com",
        "role": "student",
        "isLoggedIn": true,
      })
    );
  }

  #[test]
  fn record_without_role_does_not_parse() {
    let raw = r#"{"name":"Guest","email":"g@example.com","isLoggedIn":true}"#;
    assert!(serde_json::from_str::<Principal>(raw).is_err());
  }

  #[test]
  fn record_with_unknown_role_does_not_parse() {
    let raw = r#"{"name":"P","email":"p@example.com","role":"parent","isLoggedIn":true}"#;
    assert!(serde_json::from_str::<Principal>(raw).is_err());
  }
}
