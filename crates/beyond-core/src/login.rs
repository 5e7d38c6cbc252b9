//! The mock login protocol.
//!
//! Credentials are compared verbatim against the [`CredentialDirectory`]: no
//! hashing, exact case-sensitive match. On success the session slot is
//! overwritten; on any failure it is left untouched.

use serde::Deserialize;

use crate::{
  Error, Result, ValidationError,
  directory::CredentialDirectory,
  principal::Principal,
  role::Role,
  route::{Navigation, Notice, Route},
  session::SessionStore,
};

/// A submitted login form. `role` is the raw claim chosen by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
  #[serde(default)]
  pub email:    String,
  #[serde(default)]
  pub password: String,
  #[serde(default)]
  pub role:     String,
}

impl LoginRequest {
  pub fn new(
    email: impl Into<String>,
    password: impl Into<String>,
    role: impl Into<String>,
  ) -> Self {
    Self {
      email:    email.into(),
      password: password.into(),
      role:     role.into(),
    }
  }
}

/// A successful login: the stored principal and where to send the user.
#[derive(Debug, Clone)]
pub struct LoggedIn {
  pub principal:  Principal,
  pub navigation: Navigation,
}

/// Verify `request` against `directory` and, on a match, write the resulting
/// principal into `session`.
///
/// Fails with [`ValidationError::MissingFields`] before any lookup if email
/// or password is empty, and with [`Error::Authentication`] if nothing in the
/// claimed role's partition matches.
pub fn login<S>(
  directory: &CredentialDirectory,
  session: &S,
  request: &LoginRequest,
) -> Result<LoggedIn>
where
  S: SessionStore + ?Sized,
{
  if request.email.is_empty() || request.password.is_empty() {
    return Err(ValidationError::MissingFields.into());
  }

  let matched = Role::from_claim(&request.role).and_then(|role| {
    directory
      .find(Some(role), &request.email, &request.password)
      .map(|record| (role, record))
  });
  let Some((role, record)) = matched else {
    tracing::warn!(email = %request.email, role = %request.role, "login rejected");
    return Err(Error::Authentication);
  };

  let principal = Principal::authenticated(&record.name, &request.email, role);
  session.set(&principal)?;
  tracing::info!(email = %principal.email, %role, "login succeeded");

  Ok(LoggedIn {
    navigation: Navigation::redirect(
      Notice::success("Login successful!"),
      Route::after_login(Some(role)),
    ),
    principal,
  })
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;
  use crate::{session::Session, storage::MemoryStorage};

  fn fresh() -> (CredentialDirectory, Session<MemoryStorage>) {
    (CredentialDirectory::seed(), Session::new(MemoryStorage::new()))
  }

  #[test]
  fn student_login_stores_principal() {
    let (dir, session) = fresh();
    let out = login(
      &dir,
      &session,
      &LoginRequest::new("student1@gmail.com", "student1", "student"),
    )
    .unwrap();

    let expected = Principal::authenticated("Alex Morgan", "student1@gmail.com", Role::Student);
    assert_eq!(out.principal, expected);
    assert_eq!(session.get().unwrap(), Some(expected));
    assert_eq!(out.navigation.redirect, Some(Route::StudentDashboard));
    assert_eq!(out.navigation.notice.message, "Login successful!");
  }

  #[test]
  fn every_seeded_record_logs_in_with_its_own_role() {
    let dir = CredentialDirectory::seed();
    for role in Role::iter() {
      for record in dir.partition(Some(role)) {
        let session = Session::new(MemoryStorage::new());
        let out = login(
          &dir,
          &session,
          &LoginRequest::new(&record.email, &record.password, role.to_string()),
        )
        .unwrap();
        assert_eq!(out.principal.role, role);
        assert_eq!(out.navigation.redirect, Some(Route::dashboard_for(role)));
      }
    }
  }

  #[test]
  fn empty_fields_fail_validation_without_touching_session() {
    let (dir, session) = fresh();
    for req in [
      LoginRequest::new("", "student1", "student"),
      LoginRequest::new("student1@gmail.com", "", "student"),
      LoginRequest::new("", "", "student"),
    ] {
      let err = login(&dir, &session, &req).unwrap_err();
      assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingFields)
      ));
    }
    assert_eq!(session.get().unwrap(), None);
  }

  #[test]
  fn wrong_password_leaves_existing_session() {
    let (dir, session) = fresh();
    login(
      &dir,
      &session,
      &LoginRequest::new("coach1@gmail.com", "coach1", "coach"),
    )
    .unwrap();
    let before = session.get().unwrap();

    let err = login(
      &dir,
      &session,
      &LoginRequest::new("admin1@gmail.com", "wrongpassword", "admin"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Authentication));
    assert_eq!(session.get().unwrap(), before);
  }

  #[test]
  fn valid_credentials_under_wrong_role_fail() {
    let (dir, session) = fresh();
    let err = login(
      &dir,
      &session,
      &LoginRequest::new("student1@gmail.com", "student1", "coach"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Authentication));
    assert_eq!(session.get().unwrap(), None);
  }

  #[test]
  fn unknown_role_claim_fails() {
    let (dir, session) = fresh();
    let err = login(
      &dir,
      &session,
      &LoginRequest::new("student1@gmail.com", "student1", "parent"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Authentication));
  }

  #[test]
  fn failure_notice_does_not_reveal_account_existence() {
    let (dir, session) = fresh();
    let known = login(
      &dir,
      &session,
      &LoginRequest::new("student1@gmail.com", "nope", "student"),
    )
    .unwrap_err();
    let unknown = login(
      &dir,
      &session,
      &LoginRequest::new("ghost@gmail.com", "nope", "student"),
    )
    .unwrap_err();
    assert_eq!(known.notice().message, unknown.notice().message);
  }
}
