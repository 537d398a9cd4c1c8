//! Handlers for `/recommend` endpoints.
//!
//! All four take `?city=<name>` and answer with the current temperature
//! plus the matching band's content. A missing or blank city is a 400;
//! an unanswerable weather lookup is a 502.

use axum::{
  Json,
  extract::{Query, State},
};
use bites_core::{
  recommend::{Forecast, Locations, Pairing, SeasonalSnacks, Snacks},
  store::ReviewStore,
  weather::WeatherLookup,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct CityParams {
  #[serde(default)]
  pub city: String,
}

/// `GET /recommend/locations?city=<name>`
pub async fn locations<S, W>(
  State(state): State<ApiState<S, W>>,
  Query(params): Query<CityParams>,
) -> Result<Json<Forecast<Locations>>, ApiError>
where
  S: ReviewStore,
  W: WeatherLookup,
{
  let forecast = state.recommender.locations_for(&params.city).await?;
  Ok(Json(forecast))
}

/// `GET /recommend/snacks?city=<name>`
pub async fn snacks<S, W>(
  State(state): State<ApiState<S, W>>,
  Query(params): Query<CityParams>,
) -> Result<Json<Forecast<Snacks>>, ApiError>
where
  S: ReviewStore,
  W: WeatherLookup,
{
  let forecast = state.recommender.snacks_for(&params.city).await?;
  Ok(Json(forecast))
}

/// `GET /recommend/seasonal?city=<name>`
pub async fn seasonal<S, W>(
  State(state): State<ApiState<S, W>>,
  Query(params): Query<CityParams>,
) -> Result<Json<Forecast<SeasonalSnacks>>, ApiError>
where
  S: ReviewStore,
  W: WeatherLookup,
{
  let forecast = state.recommender.seasonal_for(&params.city).await?;
  Ok(Json(forecast))
}

/// `GET /recommend/pairing?city=<name>`
pub async fn pairing<S, W>(
  State(state): State<ApiState<S, W>>,
  Query(params): Query<CityParams>,
) -> Result<Json<Pairing>, ApiError>
where
  S: ReviewStore,
  W: WeatherLookup,
{
  let pairing = state.recommender.pairing_for(&params.city).await?;
  Ok(Json(pairing))
}
