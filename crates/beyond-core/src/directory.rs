//! The credential directory consulted by the mock login protocol.
//!
//! Loaded once at start-up (from configuration or [`CredentialDirectory::seed`])
//! and never mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, role::Role};

/// One `{email, password, name}` entry. Passwords are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
  pub email:    String,
  pub password: String,
  pub name:     String,
}

impl CredentialRecord {
  pub fn new(
    email: impl Into<String>,
    password: impl Into<String>,
    name: impl Into<String>,
  ) -> Self {
    Self {
      email:    email.into(),
      password: password.into(),
      name:     name.into(),
    }
  }
}

/// Role-partitioned credential lists, in lookup order.
///
/// Email is unique within a partition but may repeat across partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDirectory {
  #[serde(default)]
  pub students: Vec<CredentialRecord>,
  #[serde(default)]
  pub coaches:  Vec<CredentialRecord>,
  #[serde(default)]
  pub admins:   Vec<CredentialRecord>,
}

impl CredentialDirectory {
  /// The built-in mock directory.
  pub fn seed() -> Self {
    Self {
      students: vec![
        CredentialRecord::new("student1@gmail.com", "student1", "Alex Morgan"),
        CredentialRecord::new("student2@gmail.com", "student2", "Jamie Taylor"),
      ],
      coaches:  vec![
        CredentialRecord::new("coach1@gmail.com", "coach1", "David Smith"),
        CredentialRecord::new("coach2@gmail.com", "coach2", "Lisa Johnson"),
      ],
      admins:   vec![CredentialRecord::new(
        "admin1@gmail.com",
        "admin1",
        "Academy Admin",
      )],
    }
  }

  /// The partition searched for a role claim. An unrecognised claim maps to
  /// the empty partition.
  pub fn partition(&self, role: Option<Role>) -> &[CredentialRecord] {
    match role {
      Some(Role::Student) => &self.students,
      Some(Role::Coach) => &self.coaches,
      Some(Role::Admin) => &self.admins,
      None => &[],
    }
  }

  /// First record in the role's partition matching both email and password
  /// exactly.
  pub fn find(
    &self,
    role: Option<Role>,
    email: &str,
    password: &str,
  ) -> Option<&CredentialRecord> {
    self
      .partition(role)
      .iter()
      .find(|r| r.email == email && r.password == password)
  }

  /// Reject a directory with a repeated email inside a single partition.
  pub fn validate(&self) -> Result<()> {
    for role in [Role::Student, Role::Coach, Role::Admin] {
      let mut seen = HashSet::new();
      for record in self.partition(Some(role)) {
        if !seen.insert(record.email.as_str()) {
          return Err(Error::Directory(format!(
            "duplicate email {:?} in {}",
            record.email,
            role.partition_name()
          )));
        }
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_is_valid() {
    CredentialDirectory::seed().validate().unwrap();
  }

  #[test]
  fn unknown_role_has_empty_partition() {
    let dir = CredentialDirectory::seed();
    assert!(dir.partition(None).is_empty());
    assert!(dir.find(None, "student1@gmail.com", "student1").is_none());
  }

  #[test]
  fn lookup_is_exact_and_case_sensitive() {
    let dir = CredentialDirectory::seed();
    assert!(dir.find(Some(Role::Student), "student1@gmail.com", "student1").is_some());
    assert!(dir.find(Some(Role::Student), "Student1@gmail.com", "student1").is_none());
    assert!(dir.find(Some(Role::Student), "student1@gmail.com", "Student1").is_none());
    assert!(dir.find(Some(Role::Coach), "student1@gmail.com", "student1").is_none());
  }

  #[test]
  fn first_match_wins() {
    let dir = CredentialDirectory {
      students: vec![
        CredentialRecord::new("a@x.com", "pw", "First"),
        CredentialRecord::new("b@x.com", "pw", "Second"),
      ],
      ..Default::default()
    };
    let found = dir.find(Some(Role::Student), "b@x.com", "pw").unwrap();
    assert_eq!(found.name, "Second");
  }

  #[test]
  fn duplicate_within_partition_is_rejected() {
    let dir = CredentialDirectory {
      coaches: vec![
        CredentialRecord::new("c@x.com", "one", "One"),
        CredentialRecord::new("c@x.com", "two", "Two"),
      ],
      ..Default::default()
    };
    assert!(matches!(dir.validate(), Err(Error::Directory(_))));
  }

  #[test]
  fn duplicate_across_partitions_is_allowed() {
    let dir = CredentialDirectory {
      students: vec![CredentialRecord::new("same@x.com", "s", "S")],
      admins: vec![CredentialRecord::new("same@x.com", "a", "A")],
      ..Default::default()
    };
    dir.validate().unwrap();
  }

  #[test]
  fn deserialises_with_missing_partitions() {
    let dir: CredentialDirectory = serde_json::from_str(
      r#"{"students":[{"email":"e","password":"p","name":"n"}]}"#,
    )
    .unwrap();
    assert_eq!(dir.students.len(), 1);
    assert!(dir.coaches.is_empty());
    assert!(dir.admins.is_empty());
  }
}
