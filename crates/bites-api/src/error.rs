//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use bites_core::store::AsCoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("upstream unavailable: {0}")]
  BadGateway(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Map a backend failure, recovering the core taxonomy where the
  /// backend carries it; anything else is a 500.
  pub fn from_store<E>(e: E) -> Self
  where
    E: AsCoreError + std::error::Error + Send + Sync + 'static,
  {
    match e.as_core() {
      Some(core) => Self::from(core),
      None => ApiError::Store(Box::new(e)),
    }
  }
}

impl From<&bites_core::Error> for ApiError {
  fn from(e: &bites_core::Error) -> Self {
    use bites_core::Error as E;
    match e {
      E::InvalidRating(_) | E::UnknownLocation(_) | E::EmptyCity => {
        ApiError::BadRequest(e.to_string())
      }
      E::ReviewNotFound(_) | E::ReviewNameNotFound(_) => {
        ApiError::NotFound(e.to_string())
      }
      E::AlreadyDeleted(_) | E::DuplicateName(_) => {
        ApiError::Conflict(e.to_string())
      }
      E::WeatherUnavailable(_) => ApiError::BadGateway(e.to_string()),
    }
  }
}

impl From<bites_core::Error> for ApiError {
  fn from(e: bites_core::Error) -> Self { ApiError::from(&e) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::BadGateway(m) => (StatusCode::BAD_GATEWAY, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
