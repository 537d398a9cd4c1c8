//! Error types for `bites-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid rating: {0} (must be between 1 and 5)")]
  InvalidRating(i32),

  #[error("unknown snack location: {0:?}")]
  UnknownLocation(String),

  #[error("city must not be empty")]
  EmptyCity,

  #[error("review not found: {0}")]
  ReviewNotFound(Uuid),

  #[error("no review named {0:?}")]
  ReviewNameNotFound(String),

  #[error("review {0} is already deleted")]
  AlreadyDeleted(Uuid),

  #[error("a review named {0:?} already exists")]
  DuplicateName(String),

  #[error("no weather reading available for {0:?}")]
  WeatherUnavailable(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
