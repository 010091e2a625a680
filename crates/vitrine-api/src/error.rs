//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every variant is recovered at the boundary and rendered as a
//! `{"success": false, "message": ...}` body; none is fatal to the process.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use vitrine_core::Error as CoreError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  BadRequest(String),

  /// Catch-all for failures not anticipated by validation. `detail` is
  /// rendered only in a development-like configuration; the full failure is
  /// always logged server-side.
  #[error("{message}")]
  Unexpected {
    message: String,
    detail:  Option<String>,
  },
}

impl ApiError {
  /// Wrap an unanticipated failure with an endpoint-specific caller-facing
  /// message. `expose_detail` gates whether the underlying error text leaves
  /// the process.
  pub fn unexpected<E>(message: &str, err: E, expose_detail: bool) -> Self
  where
    E: std::fmt::Display,
  {
    tracing::error!(error = %err, "{message}");
    ApiError::Unexpected {
      message: message.to_owned(),
      detail:  expose_detail.then(|| err.to_string()),
    }
  }
}

impl From<CoreError> for ApiError {
  fn from(e: CoreError) -> Self {
    match e {
      CoreError::MissingFields | CoreError::InvalidEmail | CoreError::MissingQuery => {
        ApiError::BadRequest(e.to_string())
      }
      CoreError::ItemNotFound(_) => ApiError::NotFound(e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound(m) => (
        StatusCode::NOT_FOUND,
        json!({ "success": false, "message": m }),
      ),
      ApiError::BadRequest(m) => (
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "message": m }),
      ),
      ApiError::Unexpected { message, detail } => {
        let mut body = json!({ "success": false, "message": message });
        if let Some(detail) = detail {
          body["error"] = json!(detail);
        }
        (StatusCode::INTERNAL_SERVER_ERROR, body)
      }
    };
    (status, Json(body)).into_response()
  }
}
