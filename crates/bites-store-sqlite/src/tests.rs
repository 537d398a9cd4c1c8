//! Integration tests for `SqliteStore` against an in-memory database.

use bites_core::{review::NewReview, store::ReviewStore};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn hot_chocolate() -> NewReview {
  NewReview {
    name:     "Hot Chocolate".into(),
    location: "1369 Coffee House".into(),
    rating:   5,
    favorite: true,
    review:   Some("great".into()),
  }
}

fn snack(name: &str, location: &str, rating: i32, favorite: bool) -> NewReview {
  NewReview {
    name: name.into(),
    location: location.into(),
    rating,
    favorite,
    review: None,
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_round_trips() {
  let s = store().await;

  let created = s.create_review(hot_chocolate()).await.unwrap();
  assert!(!created.deleted);

  let fetched = s.get_review(created.id).await.unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.name, "Hot Chocolate");
  assert_eq!(fetched.location, "1369 Coffee House");
  assert_eq!(fetched.rating, 5);
  assert!(fetched.favorite);
  assert_eq!(fetched.review.as_deref(), Some("great"));
  assert!(!fetched.deleted);
}

#[tokio::test]
async fn get_missing_review_is_not_found() {
  let s = store().await;
  let err = s.get_review(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
}

#[tokio::test]
async fn get_by_name_finds_live_record() {
  let s = store().await;
  let created = s.create_review(hot_chocolate()).await.unwrap();

  let fetched = s.get_review_by_name("Hot Chocolate").await.unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.location, "1369 Coffee House");
}

#[tokio::test]
async fn get_by_name_hides_deleted_and_missing_alike() {
  let s = store().await;
  let created = s.create_review(hot_chocolate()).await.unwrap();
  s.delete_review(created.id).await.unwrap();

  assert!(matches!(
    s.get_review_by_name("Hot Chocolate").await.unwrap_err(),
    crate::Error::Core(bites_core::Error::ReviewNameNotFound(_))
  ));
  assert!(matches!(
    s.get_review_by_name("Affogato").await.unwrap_err(),
    crate::Error::Core(bites_core::Error::ReviewNameNotFound(_))
  ));
}

#[tokio::test]
async fn create_rejects_bad_rating_without_writing() {
  let s = store().await;

  let err = s
    .create_review(snack("Scone", "Tatte", 0, false))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::InvalidRating(0))
  ));

  let err = s
    .create_review(snack("Scone", "Tatte", 6, false))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::InvalidRating(6))
  ));
}

#[tokio::test]
async fn create_rejects_unknown_location() {
  let s = store().await;
  let err = s
    .create_review(snack("Latte", "Starbucks", 3, false))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::UnknownLocation(_))
  ));
}

#[tokio::test]
async fn duplicate_name_conflicts_and_keeps_first() {
  let s = store().await;

  let first = s.create_review(hot_chocolate()).await.unwrap();

  let mut second = hot_chocolate();
  second.location = "Tatte".into();
  second.rating = 1;
  let err = s.create_review(second).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::DuplicateName(_))
  ));

  // First record is untouched.
  let fetched = s.get_review(first.id).await.unwrap();
  assert_eq!(fetched.location, "1369 Coffee House");
  assert_eq!(fetched.rating, 5);
}

#[tokio::test]
async fn deleted_name_stays_reserved() {
  let s = store().await;

  let first = s.create_review(hot_chocolate()).await.unwrap();
  s.delete_review(first.id).await.unwrap();

  let err = s.create_review(hot_chocolate()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::DuplicateName(_))
  ));
}

// ─── Soft delete ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_hides_record_and_is_not_repeatable() {
  let s = store().await;
  let created = s.create_review(hot_chocolate()).await.unwrap();

  s.delete_review(created.id).await.unwrap();

  let err = s.get_review(created.id).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));

  let err = s.delete_review(created.id).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::AlreadyDeleted(_))
  ));
}

#[tokio::test]
async fn delete_missing_review_is_not_found() {
  let s = store().await;
  let err = s.delete_review(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
}

#[tokio::test]
async fn mutations_reject_deleted_records() {
  let s = store().await;
  let created = s.create_review(hot_chocolate()).await.unwrap();
  s.delete_review(created.id).await.unwrap();

  assert!(matches!(
    s.update_rating(created.id, 3).await.unwrap_err(),
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
  assert!(matches!(
    s.update_favorite(created.id, false).await.unwrap_err(),
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
  assert!(matches!(
    s.update_review_text(created.id, "late".into()).await.unwrap_err(),
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
}

// ─── Mutations ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_rating_round_trips() {
  let s = store().await;
  let created = s.create_review(hot_chocolate()).await.unwrap();

  let updated = s.update_rating(created.id, 2).await.unwrap();
  assert_eq!(updated.rating, 2);

  let fetched = s.get_review(created.id).await.unwrap();
  assert_eq!(fetched.rating, 2);
}

#[tokio::test]
async fn update_rating_out_of_range_leaves_record_unchanged() {
  let s = store().await;
  let created = s.create_review(hot_chocolate()).await.unwrap();

  for bad in [0, 6] {
    let err = s.update_rating(created.id, bad).await.unwrap_err();
    assert!(matches!(
      err,
      crate::Error::Core(bites_core::Error::InvalidRating(_))
    ));
  }

  let fetched = s.get_review(created.id).await.unwrap();
  assert_eq!(fetched.rating, 5);
}

#[tokio::test]
async fn update_text_and_favorite() {
  let s = store().await;
  let created = s
    .create_review(snack("Snow Ice", "Tiger Sugar", 4, false))
    .await
    .unwrap();

  let updated = s
    .update_review_text(created.id, "melted too fast".into())
    .await
    .unwrap();
  assert_eq!(updated.review.as_deref(), Some("melted too fast"));

  let updated = s.update_favorite(created.id, true).await.unwrap();
  assert!(updated.favorite);

  let fetched = s.get_review(created.id).await.unwrap();
  assert_eq!(fetched.review.as_deref(), Some("melted too fast"));
  assert!(fetched.favorite);
}

#[tokio::test]
async fn update_missing_review_is_not_found() {
  let s = store().await;
  let err = s
    .update_review_text(Uuid::new_v4(), "ghost".into())
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
}

// ─── Favorites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_favorites_in_creation_order() {
  let s = store().await;

  let a = s
    .create_review(snack("Cookie", "Levain", 5, true))
    .await
    .unwrap();
  s.create_review(snack("Muffin", "Tatte", 3, false))
    .await
    .unwrap();
  let c = s
    .create_review(snack("Soft Serve", "Kyo Matcha", 4, true))
    .await
    .unwrap();

  let favorites = s.list_favorites().await.unwrap();
  let ids: Vec<_> = favorites.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![a.id, c.id]);
}

#[tokio::test]
async fn list_favorites_excludes_deleted() {
  let s = store().await;

  let kept = s
    .create_review(snack("Cookie", "Levain", 5, true))
    .await
    .unwrap();
  let dropped = s
    .create_review(snack("Sundae", "JP Licks", 5, true))
    .await
    .unwrap();
  s.delete_review(dropped.id).await.unwrap();

  let favorites = s.list_favorites().await.unwrap();
  assert_eq!(favorites.len(), 1);
  assert_eq!(favorites[0].id, kept.id);
}

// ─── Clear ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn clear_all_removes_everything() {
  let s = store().await;
  s.create_review(hot_chocolate()).await.unwrap();
  s.create_review(snack("Cookie", "Levain", 5, true))
    .await
    .unwrap();

  s.clear_all().await.unwrap();

  assert!(s.list_favorites().await.unwrap().is_empty());
  // Names are free again after a clear.
  s.create_review(hot_chocolate()).await.unwrap();
}

// ─── End-to-end scenario ─────────────────────────────────────────────────────

#[tokio::test]
async fn hot_chocolate_lifecycle() {
  let s = store().await;

  let created = s.create_review(hot_chocolate()).await.unwrap();

  let fetched = s.get_review(created.id).await.unwrap();
  assert_eq!(fetched.rating, 5);
  assert!(fetched.favorite);

  let updated = s.update_rating(created.id, 2).await.unwrap();
  assert_eq!(updated.rating, 2);

  s.delete_review(created.id).await.unwrap();
  assert!(matches!(
    s.get_review(created.id).await.unwrap_err(),
    crate::Error::Core(bites_core::Error::ReviewNotFound(_))
  ));
}
