//! OpenWeatherMap client implementing [`WeatherLookup`].
//!
//! One request per lookup against the current-weather endpoint with
//! `units=imperial`, so readings are degrees Fahrenheit to match the
//! bucketing thresholds. No caching and no retry — a failed or empty
//! lookup surfaces as "no reading" and the caller decides what to do.

use std::time::Duration;

use bites_core::weather::WeatherLookup;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// Outbound requests are bounded so a stalled upstream cannot hang a
/// recommendation request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum Error {
  #[error("http client error: {0}")]
  Http(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Response shape ──────────────────────────────────────────────────────────

/// The slice of the current-weather response we consult; everything
/// else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
  main: WeatherMain,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
  temp: f64,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async client for the OpenWeatherMap current-weather API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct OpenWeatherClient {
  client:   reqwest::Client,
  base_url: String,
  api_key:  String,
}

impl OpenWeatherClient {
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::with_base_url(api_key, DEFAULT_BASE_URL)
  }

  /// Point the client at a non-default host — used in tests.
  pub fn with_base_url(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
  ) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()?;
    Ok(Self {
      client,
      base_url: base_url.into(),
      api_key: api_key.into(),
    })
  }
}

impl WeatherLookup for OpenWeatherClient {
  type Error = Error;

  async fn current_temp_f(&self, city: &str) -> Result<Option<f64>> {
    let url = format!(
      "{}/data/2.5/weather",
      self.base_url.trim_end_matches('/')
    );

    let resp = self
      .client
      .get(&url)
      .query(&[
        ("q", city),
        ("appid", self.api_key.as_str()),
        ("units", "imperial"),
      ])
      .send()
      .await?;

    // Unknown cities come back 404; treat every non-success status as
    // "no reading" rather than a transport failure.
    if !resp.status().is_success() {
      tracing::debug!(city, status = %resp.status(), "no weather reading");
      return Ok(None);
    }

    let body: WeatherResponse = resp.json().await?;
    Ok(Some(body.main.temp))
  }
}
