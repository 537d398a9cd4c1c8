//! The `ReviewStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `bites-store-sqlite`). Higher layers (`bites-api`, `bites-server`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::review::{NewReview, Review};

/// Implemented by backend error types so transport layers can recover
/// the core error taxonomy for status mapping without downcasting.
pub trait AsCoreError {
  /// The underlying [`crate::Error`], if this failure carries one.
  /// `None` means a backend fault (storage I/O and the like).
  fn as_core(&self) -> Option<&crate::Error>;
}

impl AsCoreError for crate::Error {
  fn as_core(&self) -> Option<&crate::Error> { Some(self) }
}

/// Abstraction over a review store backend.
///
/// Each operation is atomic at the granularity of one record: the
/// backend reads any validation state, applies the mutation, and
/// commits as a whole, with no partial visibility to concurrent
/// readers. Soft deletion is terminal — once a record is deleted, every
/// remaining operation on it is rejected rather than silently ignored.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ReviewStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Validate and persist a new review with `deleted = false`.
  ///
  /// Fails without touching storage if the rating is out of range or
  /// the location is not on the allow-list, and with a uniqueness
  /// error if a review with the same name already exists — live or
  /// soft-deleted.
  fn create_review(
    &self,
    input: NewReview,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Retrieve a live review by id.
  ///
  /// A soft-deleted review is indistinguishable from an absent one
  /// here; both fail as not-found.
  fn get_review(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Retrieve a live review by its unique name.
  ///
  /// Same visibility rule as [`get_review`](ReviewStore::get_review):
  /// a soft-deleted review fails as not-found.
  fn get_review_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + 'a;

  /// Soft-delete a review.
  ///
  /// Fails as not-found if no such id exists, and as already-deleted
  /// if the marker is already set. The transition is one-way.
  fn delete_review(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Overwrite the free-text review body of a live review.
  fn update_review_text(
    &self,
    id: Uuid,
    text: String,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Overwrite the rating of a live review.
  ///
  /// The range check runs before any storage access; an out-of-range
  /// value never persists.
  fn update_rating(
    &self,
    id: Uuid,
    rating: i32,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Overwrite the favorite flag of a live review.
  fn update_favorite(
    &self,
    id: Uuid,
    favorite: bool,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// All live reviews with `favorite = true`, in creation order.
  fn list_favorites(
    &self,
  ) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send + '_;

  /// Destructive reset: remove every record unconditionally.
  ///
  /// Administrative/test-only — not exposed through the API surface.
  fn clear_all(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
