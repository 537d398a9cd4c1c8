//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings; booleans as
//! INTEGER 0/1 (rusqlite's native bool mapping).

use bites_core::review::Review;
use uuid::Uuid;

use crate::Result;

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

/// The column list shared by every `SELECT` against `reviews`.
pub const REVIEW_COLUMNS: &str =
  "review_id, name, location, rating, favorite, review, deleted";

/// Raw values read directly from a `reviews` row.
pub struct RawReview {
  pub review_id: String,
  pub name:      String,
  pub location:  String,
  pub rating:    i32,
  pub favorite:  bool,
  pub review:    Option<String>,
  pub deleted:   bool,
}

impl RawReview {
  /// Map a rusqlite row, with columns in [`REVIEW_COLUMNS`] order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawReview {
      review_id: row.get(0)?,
      name:      row.get(1)?,
      location:  row.get(2)?,
      rating:    row.get(3)?,
      favorite:  row.get(4)?,
      review:    row.get(5)?,
      deleted:   row.get(6)?,
    })
  }

  pub fn into_review(self) -> Result<Review> {
    Ok(Review {
      id:       decode_uuid(&self.review_id)?,
      name:     self.name,
      location: self.location,
      rating:   self.rating,
      favorite: self.favorite,
      review:   self.review,
      deleted:  self.deleted,
    })
  }
}
