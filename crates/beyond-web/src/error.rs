//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a handler. Every variant renders as a JSON body
/// carrying the user-facing notice.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] beyond_core::Error),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    use beyond_core::Error as E;
    match self {
      ApiError::Core(E::Validation(_)) => StatusCode::BAD_REQUEST,
      ApiError::Core(E::Authentication) => StatusCode::UNAUTHORIZED,
      ApiError::Core(E::SessionAbsent | E::SessionCorrupt(_)) => {
        StatusCode::UNAUTHORIZED
      }
      ApiError::Core(E::SessionMismatch { .. }) => StatusCode::FORBIDDEN,
      ApiError::Core(E::Storage(_) | E::Directory(_)) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    let ApiError::Core(err) = &self;
    let body = json!({
      "error":  err.to_string(),
      "notice": err.notice(),
    });
    (status, Json(body)).into_response()
  }
}
