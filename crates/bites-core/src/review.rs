//! Review — the one persistent entity in the system.
//!
//! A review records what was purchased, where, and how it rated. Reviews
//! are never physically removed; deletion flips a one-way `deleted`
//! marker that hides the record from every normal read path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, menu};

/// Bounds for [`Review::rating`], inclusive.
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

// ─── Review ──────────────────────────────────────────────────────────────────

/// A persisted snack review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
  /// Store-assigned; immutable after creation.
  pub id:       Uuid,
  /// The item purchased. Globally unique across live and deleted rows.
  pub name:     String,
  /// Where it was purchased; always a member of
  /// [`menu::ALL_LOCATIONS`].
  pub location: String,
  /// 1 through 5, enforced on create and on every update.
  pub rating:   i32,
  pub favorite: bool,
  /// Free-text review body, if any.
  pub review:   Option<String>,
  /// Soft-delete marker. Once true, never reset.
  pub deleted:  bool,
}

// ─── NewReview ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::ReviewStore::create_review`].
/// `id` is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
  pub name:     String,
  pub location: String,
  pub rating:   i32,
  #[serde(default)]
  pub favorite: bool,
  #[serde(default)]
  pub review:   Option<String>,
}

impl NewReview {
  /// Check the rating range and location allow-list.
  ///
  /// Stores call this before touching the backend, so invalid input
  /// never reaches a write.
  pub fn validate(&self) -> Result<()> {
    validate_rating(self.rating)?;
    if !menu::is_known_location(&self.location) {
      return Err(Error::UnknownLocation(self.location.clone()));
    }
    Ok(())
  }
}

/// Check that `rating` is within `1..=5`.
pub fn validate_rating(rating: i32) -> Result<()> {
  if !(RATING_MIN..=RATING_MAX).contains(&rating) {
    return Err(Error::InvalidRating(rating));
  }
  Ok(())
}
