//! Protected-view extractor and the redirect response shape.

use std::marker::PhantomData;

use axum::{
  Json,
  extract::FromRequestParts,
  http::{HeaderValue, StatusCode, header, request::Parts},
  response::{IntoResponse, Response},
};
use beyond_core::{
  guard::{Access, guard},
  principal::Principal,
  role::Role,
  route::{Navigation, Requirement, Route},
  storage::SlotStorage,
};
use serde::Serialize;

use crate::AppState;

// ─── Navigated ───────────────────────────────────────────────────────────────

/// A [`Navigation`] rendered as HTTP: `303 See Other` with `Location` when it
/// redirects, `200 OK` otherwise. The body always carries the notice.
#[derive(Debug, Serialize)]
pub struct Navigated {
  #[serde(flatten)]
  pub navigation: Navigation,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub principal:  Option<Principal>,
}

impl From<Navigation> for Navigated {
  fn from(navigation: Navigation) -> Self {
    Self {
      navigation,
      principal: None,
    }
  }
}

impl IntoResponse for Navigated {
  fn into_response(self) -> Response {
    let location = self.navigation.redirect.map(Route::path);
    let status = match location {
      Some(_) => StatusCode::SEE_OTHER,
      None => StatusCode::OK,
    };
    let mut res = (status, Json(self)).into_response();
    if let Some(path) = location {
      res
        .headers_mut()
        .insert(header::LOCATION, HeaderValue::from_static(path));
    }
    res
  }
}

// ─── Protected views ─────────────────────────────────────────────────────────

/// A view that requires a guard check before it renders.
pub trait ProtectedView: Send + Sync + 'static {
  const ROUTE: Route;
  const REQUIREMENT: Requirement;
}

macro_rules! protected_view {
  ($name:ident, $route:expr, $req:expr) => {
    pub struct $name;

    impl ProtectedView for $name {
      const REQUIREMENT: Requirement = $req;
      const ROUTE: Route = $route;
    }
  };
}

protected_view!(AnyDashboard, Route::Dashboard, Requirement::Authenticated);
protected_view!(
  StudentDashboard,
  Route::StudentDashboard,
  Requirement::Role(Role::Student)
);
protected_view!(
  CoachDashboard,
  Route::CoachDashboard,
  Requirement::Role(Role::Coach)
);
protected_view!(
  AdminDashboard,
  Route::AdminDashboard,
  Requirement::Role(Role::Admin)
);

/// Present in a handler means the guard for `V` passed; holds the principal
/// to render.
pub struct Viewer<V> {
  pub principal: Principal,
  _view:         PhantomData<fn() -> V>,
}

impl<S, V> FromRequestParts<AppState<S>> for Viewer<V>
where
  S: SlotStorage + 'static,
  V: ProtectedView,
{
  type Rejection = Navigated;

  async fn from_request_parts(
    _parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    match guard(&*state.session, V::REQUIREMENT) {
      Access::Granted(principal) => Ok(Self {
        principal,
        _view: PhantomData,
      }),
      Access::Denied { reason, navigation } => {
        tracing::info!(view = %V::ROUTE, %reason, "view entry denied");
        Err(navigation.into())
      }
    }
  }
}
