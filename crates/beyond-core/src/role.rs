//! Roles a principal can hold.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The fixed set of roles. Determines which directory partition a login
/// searches, where the principal lands after login, and which protected
/// views it may enter.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Student,
  Coach,
  Admin,
}

impl Role {
  /// Parse a caller-supplied role claim. Unknown claims are `None`, never an
  /// error: the login protocol treats them as an empty partition.
  pub fn from_claim(claim: &str) -> Option<Self> { claim.parse().ok() }

  /// Directory partition key, i.e. the role pluralised.
  pub fn partition_name(self) -> &'static str {
    match self {
      Self::Student => "students",
      Self::Coach => "coaches",
      Self::Admin => "admins",
    }
  }

  /// Phrase used in the "access denied" notice.
  pub fn denial_label(self) -> &'static str {
    match self {
      Self::Student => "a student",
      Self::Coach => "a coach",
      Self::Admin => "an administrator",
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn claims_parse_lowercase_only() {
    assert_eq!(Role::from_claim("student"), Some(Role::Student));
    assert_eq!(Role::from_claim("coach"), Some(Role::Coach));
    assert_eq!(Role::from_claim("admin"), Some(Role::Admin));
    assert_eq!(Role::from_claim("Admin"), None);
    assert_eq!(Role::from_claim("parent"), None);
    assert_eq!(Role::from_claim(""), None);
  }

  #[test]
  fn display_matches_serde() {
    for role in Role::iter() {
      let json = serde_json::to_string(&role).unwrap();
      assert_eq!(json, format!("\"{role}\""));
    }
  }

  #[test]
  fn partition_is_plural() {
    assert_eq!(Role::Student.partition_name(), "students");
    assert_eq!(Role::Coach.partition_name(), "coaches");
    assert_eq!(Role::Admin.partition_name(), "admins");
  }
}
