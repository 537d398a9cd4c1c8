//! The recommendation composer.
//!
//! Orchestrates the external weather collaborator and the bucketing
//! engine into response payloads. One lookup per request, no caching,
//! no retry — if the collaborator has no reading the caller gets
//! [`Error::WeatherUnavailable`] rather than a guessed band.

use rand::seq::IndexedRandom as _;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  menu::Band,
  weather::WeatherLookup,
};

// ─── Payloads ────────────────────────────────────────────────────────────────

/// A temperature reading paired with one of the band's lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast<T> {
  /// Degrees Fahrenheit, as fetched.
  pub temperature: f64,
  #[serde(flatten)]
  pub menu:        T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locations {
  pub locations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snacks {
  pub snacks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalSnacks {
  pub seasonal_snacks: Vec<String>,
}

/// One snack drawn at random from the band's list, plus the band's
/// fixed seasonal item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pairing {
  pub temperature: f64,
  pub snack:       String,
  pub drink:       String,
}

// ─── Recommender ─────────────────────────────────────────────────────────────

/// Weather-driven recommendation composer over any [`WeatherLookup`].
#[derive(Clone)]
pub struct Recommender<W> {
  weather: W,
}

impl<W: WeatherLookup> Recommender<W> {
  pub fn new(weather: W) -> Self { Self { weather } }

  /// Fetch the temperature for `city`, rejecting blank input before
  /// any lookup and collapsing lookup failures into
  /// [`Error::WeatherUnavailable`].
  async fn fetch_temp(&self, city: &str) -> Result<f64> {
    let city = city.trim();
    if city.is_empty() {
      return Err(Error::EmptyCity);
    }

    match self.weather.current_temp_f(city).await {
      Ok(Some(temp)) => Ok(temp),
      Ok(None) => Err(Error::WeatherUnavailable(city.to_owned())),
      Err(e) => {
        tracing::warn!(city, error = %e, "weather lookup failed");
        Err(Error::WeatherUnavailable(city.to_owned()))
      }
    }
  }

  /// Venues recommended for the current weather in `city`.
  pub async fn locations_for(&self, city: &str) -> Result<Forecast<Locations>> {
    let temperature = self.fetch_temp(city).await?;
    let band = Band::for_temp(temperature);
    Ok(Forecast {
      temperature,
      menu: Locations {
        locations: band.locations().iter().map(|s| s.to_string()).collect(),
      },
    })
  }

  /// Snacks recommended for the current weather in `city`.
  pub async fn snacks_for(&self, city: &str) -> Result<Forecast<Snacks>> {
    let temperature = self.fetch_temp(city).await?;
    let band = Band::for_temp(temperature);
    Ok(Forecast {
      temperature,
      menu: Snacks {
        snacks: band.snacks().iter().map(|s| s.to_string()).collect(),
      },
    })
  }

  /// The seasonal items for the current weather in `city`.
  pub async fn seasonal_for(
    &self,
    city: &str,
  ) -> Result<Forecast<SeasonalSnacks>> {
    let temperature = self.fetch_temp(city).await?;
    let band = Band::for_temp(temperature);
    Ok(Forecast {
      temperature,
      menu: SeasonalSnacks {
        seasonal_snacks: vec![band.seasonal_snack().to_string()],
      },
    })
  }

  /// A snack chosen uniformly at random from the band's list, paired
  /// with the band's fixed seasonal item.
  pub async fn pairing_for(&self, city: &str) -> Result<Pairing> {
    let temperature = self.fetch_temp(city).await?;
    let band = Band::for_temp(temperature);

    // Band snack tables are non-empty by construction, so `choose`
    // cannot come back empty; fall back to the seasonal item anyway
    // rather than panic.
    let snack = band
      .snacks()
      .choose(&mut rand::rng())
      .copied()
      .unwrap_or_else(|| band.seasonal_snack());

    Ok(Pairing {
      temperature,
      snack: snack.to_string(),
      drink: band.seasonal_snack().to_string(),
    })
  }
}
