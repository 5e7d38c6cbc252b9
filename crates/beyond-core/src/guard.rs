//! The role guard run once when a protected view is entered.
//!
//! One parameterised check serves every protected view. It reads the session
//! slot exactly once and yields either the principal (render) or a redirect
//! to the login view with a notice. A corrupt slot is logged and handled as an
//! empty one; a storage failure is handled the same way so that entry never
//! crashes.

use crate::{
  Error,
  principal::Principal,
  route::{Navigation, Requirement, Route},
  session::SessionStore,
};

/// The guard's verdict for one render pass.
#[derive(Debug)]
pub enum Access {
  /// The view may render and display this principal.
  Granted(Principal),
  /// The view must not render. `reason` is one of [`Error::SessionAbsent`],
  /// [`Error::SessionCorrupt`], [`Error::Storage`] or
  /// [`Error::SessionMismatch`].
  Denied {
    reason:     Error,
    navigation: Navigation,
  },
}

impl Access {
  pub fn is_granted(&self) -> bool { matches!(self, Self::Granted(_)) }

  pub fn principal(&self) -> Option<&Principal> {
    match self {
      Self::Granted(p) => Some(p),
      Self::Denied { .. } => None,
    }
  }

  fn deny(reason: Error) -> Self {
    let navigation = Navigation::redirect(reason.notice(), Route::Login);
    Self::Denied { reason, navigation }
  }
}

/// Check the session slot against `requirement`.
pub fn guard<S>(session: &S, requirement: Requirement) -> Access
where
  S: SessionStore + ?Sized,
{
  let principal = match session.get() {
    Ok(Some(p)) => p,
    Ok(None) => {
      tracing::debug!(?requirement, "no session; redirecting to login");
      return Access::deny(Error::SessionAbsent);
    }
    Err(err @ Error::SessionCorrupt(_)) => {
      tracing::warn!(error = %err, "discarding unparsable session");
      return Access::deny(err);
    }
    Err(err) => {
      tracing::error!(error = %err, "failed to read session");
      return Access::deny(err);
    }
  };

  match requirement {
    Requirement::Authenticated if principal.authenticated => {
      Access::Granted(principal)
    }
    Requirement::Authenticated => Access::deny(Error::SessionAbsent),
    Requirement::Role(required)
      if principal.authenticated && principal.role == required =>
    {
      Access::Granted(principal)
    }
    Requirement::Role(required) => {
      tracing::debug!(%required, held = %principal.role, "role mismatch");
      Access::deny(Error::SessionMismatch { required })
    }
  }
}

/// Guard entry into `route`. Returns `None` for public routes, which need no
/// check.
pub fn guard_route<S>(session: &S, route: Route) -> Option<Access>
where
  S: SessionStore + ?Sized,
{
  route.requirement().map(|req| guard(session, req))
}
