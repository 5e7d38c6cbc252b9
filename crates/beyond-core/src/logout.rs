//! Logout: empty the session slot and return home.

use crate::{
  Result,
  route::{Navigation, Notice, Route},
  session::SessionStore,
};

/// Clear the session slot entirely.
///
/// Idempotent: with no active session the outcome is the same notice and
/// redirect. Only a storage failure is reported as an error.
pub fn logout<S>(session: &S) -> Result<Navigation>
where
  S: SessionStore + ?Sized,
{
  session.clear()?;
  tracing::info!("session cleared");
  Ok(Navigation::redirect(
    Notice::success("Logged out successfully"),
    Route::Home,
  ))
}
