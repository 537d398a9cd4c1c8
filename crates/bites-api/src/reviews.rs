//! Handlers for `/reviews` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/reviews` | Body: a `NewReview`; 201 on success |
//! | `GET`    | `/reviews/favorites` | Live favorites, creation order |
//! | `GET`    | `/reviews/:id` | 404 if absent or soft-deleted |
//! | `DELETE` | `/reviews/:id` | Soft delete; 409 if already deleted |
//! | `PUT`    | `/reviews/:id/text` | Body: `{"text":"..."}` |
//! | `PUT`    | `/reviews/:id/rating` | Body: `{"rating":3}` |
//! | `PUT`    | `/reviews/:id/favorite` | Body: `{"favorite":true}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use bites_core::{
  review::{NewReview, Review},
  store::{AsCoreError, ReviewStore},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /reviews`
pub async fn create<S, W>(
  State(state): State<ApiState<S, W>>,
  Json(body): Json<NewReview>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  let review = state
    .store
    .create_review(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(review)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /reviews/:id`
pub async fn get_one<S, W>(
  State(state): State<ApiState<S, W>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Review>, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  let review = state
    .store
    .get_review(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(review))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /reviews/:id`
pub async fn delete_one<S, W>(
  State(state): State<ApiState<S, W>>,
  Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  state
    .store
    .delete_review(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Mutations ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TextBody {
  pub text: String,
}

/// `PUT /reviews/:id/text`
pub async fn update_text<S, W>(
  State(state): State<ApiState<S, W>>,
  Path(id): Path<Uuid>,
  Json(body): Json<TextBody>,
) -> Result<Json<Review>, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  let review = state
    .store
    .update_review_text(id, body.text)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(review))
}

#[derive(Debug, Deserialize)]
pub struct RatingBody {
  pub rating: i32,
}

/// `PUT /reviews/:id/rating`
pub async fn update_rating<S, W>(
  State(state): State<ApiState<S, W>>,
  Path(id): Path<Uuid>,
  Json(body): Json<RatingBody>,
) -> Result<Json<Review>, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  let review = state
    .store
    .update_rating(id, body.rating)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(review))
}

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
  pub favorite: bool,
}

/// `PUT /reviews/:id/favorite`
pub async fn update_favorite<S, W>(
  State(state): State<ApiState<S, W>>,
  Path(id): Path<Uuid>,
  Json(body): Json<FavoriteBody>,
) -> Result<Json<Review>, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  let review = state
    .store
    .update_favorite(id, body.favorite)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(review))
}

// ─── Favorites ───────────────────────────────────────────────────────────────

/// `GET /reviews/favorites`
pub async fn favorites<S, W>(
  State(state): State<ApiState<S, W>>,
) -> Result<Json<Vec<Review>>, ApiError>
where
  S: ReviewStore,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
{
  let reviews = state
    .store
    .list_favorites()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(reviews))
}
