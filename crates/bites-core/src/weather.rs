//! The `WeatherLookup` trait — the external weather collaborator.

use std::future::Future;

/// A service that can report the current temperature for a city.
///
/// `Ok(None)` means the service answered but has no reading for that
/// city; `Err` is a transport-level failure. The recommendation
/// composer treats both as "weather unavailable" and never guesses a
/// fallback reading.
pub trait WeatherLookup: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Current temperature for `city`, in degrees Fahrenheit.
  fn current_temp_f<'a>(
    &'a self,
    city: &'a str,
  ) -> impl Future<Output = Result<Option<f64>, Self::Error>> + Send + 'a;
}
