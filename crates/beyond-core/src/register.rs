//! Sign-up form validation.
//!
//! The credential directory is fixed for the life of the process and only a
//! login writes the session slot, so a valid registration does not create an
//! account or a session: it sends the user on to the login view.

use serde::Deserialize;

use crate::{
  Result, ValidationError,
  route::{Navigation, Notice, Route},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
  pub name:             String,
  pub email:            String,
  pub password:         String,
  pub confirm_password: String,
  pub agree_to_terms:   bool,
}

/// Validate `form`. Checks run in order: required fields, matching
/// passwords, accepted terms.
pub fn register(form: &RegistrationForm) -> Result<Navigation> {
  if [&form.name, &form.email, &form.password, &form.confirm_password]
    .iter()
    .any(|f| f.is_empty())
  {
    return Err(ValidationError::MissingFields.into());
  }
  if form.password != form.confirm_password {
    return Err(ValidationError::PasswordMismatch.into());
  }
  if !form.agree_to_terms {
    return Err(ValidationError::TermsNotAccepted.into());
  }

  tracing::info!(email = %form.email, "registration accepted");
  Ok(Navigation::redirect(
    Notice::success("Registration successful! Please login."),
    Route::Login,
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  fn valid() -> RegistrationForm {
    RegistrationForm {
      name:             "Riley".into(),
      email:            "riley@gmail.com".into(),
      password:         "pawn-storm".into(),
      confirm_password: "pawn-storm".into(),
      agree_to_terms:   true,
    }
  }

  fn rejection(form: &RegistrationForm) -> ValidationError {
    match register(form) {
      Err(Error::Validation(v)) => v,
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn valid_form_redirects_to_login() {
    let nav = register(&valid()).unwrap();
    assert_eq!(nav.redirect, Some(Route::Login));
  }

  #[test]
  fn missing_field_is_checked_first() {
    let form = RegistrationForm {
      name: String::new(),
      confirm_password: "different".into(),
      agree_to_terms: false,
      ..valid()
    };
    assert_eq!(rejection(&form), ValidationError::MissingFields);
  }

  #[test]
  fn mismatch_before_terms() {
    let form = RegistrationForm {
      confirm_password: "different".into(),
      agree_to_terms: false,
      ..valid()
    };
    assert_eq!(rejection(&form), ValidationError::PasswordMismatch);
  }

  #[test]
  fn terms_must_be_accepted() {
    let form = RegistrationForm {
      agree_to_terms: false,
      ..valid()
    };
    assert_eq!(rejection(&form), ValidationError::TermsNotAccepted);
  }
}
