//! Login, logout, registration and session inspection.

use axum::{Json, extract::State};
use beyond_core::{
  Error,
  login::{LoginRequest, login},
  logout::logout,
  principal::Principal,
  register::{RegistrationForm, register},
  session::SessionStore,
  storage::SlotStorage,
};

use crate::{AppState, error::ApiError, view::Navigated};

/// `POST /login`
pub async fn login_handler<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginRequest>,
) -> Result<Navigated, ApiError>
where
  S: SlotStorage + 'static,
{
  let out = login(&state.directory, &*state.session, &body)?;
  Ok(Navigated {
    navigation: out.navigation,
    principal:  Some(out.principal),
  })
}

/// `POST /logout`
pub async fn logout_handler<S>(
  State(state): State<AppState<S>>,
) -> Result<Navigated, ApiError>
where
  S: SlotStorage + 'static,
{
  Ok(logout(&*state.session)?.into())
}

/// `POST /register`
pub async fn register_handler(
  Json(form): Json<RegistrationForm>,
) -> Result<Navigated, ApiError> {
  Ok(register(&form)?.into())
}

/// `GET /session`: the stored principal, or `null` when the slot is empty
/// or unreadable.
pub async fn current<S>(
  State(state): State<AppState<S>>,
) -> Json<Option<Principal>>
where
  S: SlotStorage + 'static,
{
  match state.session.get() {
    Ok(principal) => Json(principal),
    Err(err @ Error::SessionCorrupt(_)) => {
      tracing::warn!(error = %err, "discarding unparsable session");
      Json(None)
    }
    Err(err) => {
      tracing::error!(error = %err, "failed to read session");
      Json(None)
    }
  }
}
