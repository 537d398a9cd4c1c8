//! JSON REST API for Bites.
//!
//! Exposes an axum [`Router`] backed by any
//! [`bites_core::store::ReviewStore`] and
//! [`bites_core::weather::WeatherLookup`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", bites_api::api_router(store.clone(), recommender.clone()))
//! ```

pub mod error;
pub mod recommend;
pub mod reviews;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use bites_core::{
  recommend::Recommender,
  store::{AsCoreError, ReviewStore},
  weather::WeatherLookup,
};

pub use error::ApiError;

/// Shared handler state: the review store plus the recommendation
/// composer.
pub struct ApiState<S, W> {
  pub store:       Arc<S>,
  pub recommender: Arc<Recommender<W>>,
}

// Manual impl — `derive(Clone)` would demand `S: Clone` and `W: Clone`.
impl<S, W> Clone for ApiState<S, W> {
  fn clone(&self) -> Self {
    Self {
      store:       Arc::clone(&self.store),
      recommender: Arc::clone(&self.recommender),
    }
  }
}

/// Build a fully-materialised API router for `store` and `recommender`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type. `clear_all` is deliberately not
/// routed — it is an administrative operation, not part of the API.
pub fn api_router<S, W>(
  store: Arc<S>,
  recommender: Arc<Recommender<W>>,
) -> Router<()>
where
  S: ReviewStore + 'static,
  S::Error: AsCoreError + std::error::Error + Send + Sync + 'static,
  W: WeatherLookup + 'static,
{
  Router::new()
    // Reviews
    .route("/reviews", post(reviews::create::<S, W>))
    .route("/reviews/favorites", get(reviews::favorites::<S, W>))
    .route(
      "/reviews/{id}",
      get(reviews::get_one::<S, W>).delete(reviews::delete_one::<S, W>),
    )
    .route("/reviews/{id}/text", put(reviews::update_text::<S, W>))
    .route("/reviews/{id}/rating", put(reviews::update_rating::<S, W>))
    .route(
      "/reviews/{id}/favorite",
      put(reviews::update_favorite::<S, W>),
    )
    // Recommendations
    .route("/recommend/locations", get(recommend::locations::<S, W>))
    .route("/recommend/snacks", get(recommend::snacks::<S, W>))
    .route("/recommend/seasonal", get(recommend::seasonal::<S, W>))
    .route("/recommend/pairing", get(recommend::pairing::<S, W>))
    .with_state(ApiState { store, recommender })
}
