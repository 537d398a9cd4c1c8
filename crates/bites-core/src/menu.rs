//! The temperature bucketing engine.
//!
//! Six fixed bands partition the real line; each band carries a static
//! table of venues, snack suggestions, and one seasonal item. All tables
//! are compiled in — there is no runtime mutation and no I/O here.
//!
//! Temperatures are degrees **Fahrenheit** throughout. The bands are
//! half-open at the breakpoints 30/46/61/76/86, with the breakpoint
//! belonging to the upper band, so every finite input falls in exactly
//! one band.

use serde::{Deserialize, Serialize};

// ─── Band ────────────────────────────────────────────────────────────────────

/// One of the six temperature ranges driving recommendation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
  /// Below 30 °F.
  Frigid,
  /// 30 °F up to (not including) 46 °F.
  Chilly,
  /// 46 °F up to 61 °F.
  Cool,
  /// 61 °F up to 76 °F.
  Mild,
  /// 76 °F up to 86 °F.
  Warm,
  /// 86 °F and above.
  Hot,
}

impl Band {
  /// Classify a temperature reading into its band.
  ///
  /// Total over all finite floats; NaN is treated as `Hot` (it fails
  /// every `<` comparison), which callers never observe in practice
  /// since weather readings are finite.
  pub fn for_temp(temp_f: f64) -> Band {
    if temp_f < 30.0 {
      Band::Frigid
    } else if temp_f < 46.0 {
      Band::Chilly
    } else if temp_f < 61.0 {
      Band::Cool
    } else if temp_f < 76.0 {
      Band::Mild
    } else if temp_f < 86.0 {
      Band::Warm
    } else {
      Band::Hot
    }
  }

  /// Venues suited to this band.
  pub fn locations(&self) -> &'static [&'static str] {
    match self {
      Band::Frigid => &["1369 Coffee House (hot chocolate)", "Soup Shack"],
      Band::Chilly => &["1369 Coffee House", "Tatte"],
      Band::Cool => &["Blank Street Coffee", "Pavement Coffeehouse"],
      Band::Mild => &["Boba Tea and Snow Ice House", "Tiger Sugar"],
      Band::Warm => &["Levain", "Fomu"],
      Band::Hot => &["JP Licks", "Kyo Matcha"],
    }
  }

  /// Snack suggestions for this band.
  pub fn snacks(&self) -> &'static [&'static str] {
    match self {
      Band::Frigid => &["clam chowder", "grilled cheese", "beef stew"],
      Band::Chilly => &["almond croissant", "shakshuka", "cinnamon bun"],
      Band::Cool => &["blueberry muffin", "avocado toast", "bagel and lox"],
      Band::Mild => &["popcorn chicken", "snow ice", "egg waffle"],
      Band::Warm => &["chocolate chip cookie", "vegan ice cream", "brownie"],
      Band::Hot => &["frozen yogurt", "matcha soft serve", "mochi donut"],
    }
  }

  /// The single seasonal item for this band.
  pub fn seasonal_snack(&self) -> &'static str {
    match self {
      Band::Frigid => "hot chocolate",
      Band::Chilly => "mulled cider",
      Band::Cool => "chai latte",
      Band::Mild => "brown sugar boba",
      Band::Warm => "strawberry lemonade",
      Band::Hot => "watermelon slush",
    }
  }
}

// ─── Allow-list ──────────────────────────────────────────────────────────────

/// Every venue surfaced by any band — the allow-list for
/// [`Review::location`](crate::review::Review).
pub const ALL_LOCATIONS: &[&str] = &[
  "1369 Coffee House (hot chocolate)",
  "Soup Shack",
  "1369 Coffee House",
  "Tatte",
  "Blank Street Coffee",
  "Pavement Coffeehouse",
  "Boba Tea and Snow Ice House",
  "Tiger Sugar",
  "Levain",
  "Fomu",
  "JP Licks",
  "Kyo Matcha",
];

/// Whether `location` is a known snack venue.
pub fn is_known_location(location: &str) -> bool {
  ALL_LOCATIONS.contains(&location)
}

// ─── Classification ──────────────────────────────────────────────────────────

/// The full recommendation set for one band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandMenu {
  pub band:            Band,
  pub locations:       Vec<String>,
  pub snacks:          Vec<String>,
  pub seasonal_snacks: Vec<String>,
}

/// Classify a temperature (°F) and return the containing band's lists.
pub fn classify(temp_f: f64) -> BandMenu {
  let band = Band::for_temp(temp_f);
  BandMenu {
    band,
    locations: band.locations().iter().map(|s| s.to_string()).collect(),
    snacks: band.snacks().iter().map(|s| s.to_string()).collect(),
    seasonal_snacks: vec![band.seasonal_snack().to_string()],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bands_partition_the_line() {
    // One band per probe, stepping across every seam.
    let probes = [
      (-40.0, Band::Frigid),
      (29.9, Band::Frigid),
      (30.0, Band::Chilly),
      (40.0, Band::Chilly),
      (45.9, Band::Chilly),
      (46.0, Band::Cool),
      (60.9, Band::Cool),
      (61.0, Band::Mild),
      (75.9, Band::Mild),
      (76.0, Band::Warm),
      (85.9, Band::Warm),
      (86.0, Band::Hot),
      (212.0, Band::Hot),
    ];
    for (t, expected) in probes {
      assert_eq!(Band::for_temp(t), expected, "temp {t}");
    }
  }

  #[test]
  fn every_band_has_content() {
    for band in [
      Band::Frigid,
      Band::Chilly,
      Band::Cool,
      Band::Mild,
      Band::Warm,
      Band::Hot,
    ] {
      assert!(!band.locations().is_empty());
      assert!(!band.snacks().is_empty());
      assert!(!band.seasonal_snack().is_empty());
    }
  }

  #[test]
  fn classify_forty_is_the_chilly_menu() {
    let menu = classify(40.0);
    assert_eq!(menu.band, Band::Chilly);
    assert!(menu.locations.iter().any(|l| l == "1369 Coffee House"));
    assert!(menu.locations.iter().any(|l| l == "Tatte"));
    assert_eq!(menu.seasonal_snacks, vec!["mulled cider".to_string()]);
  }

  #[test]
  fn allow_list_covers_every_band_venue() {
    for band in [
      Band::Frigid,
      Band::Chilly,
      Band::Cool,
      Band::Mild,
      Band::Warm,
      Band::Hot,
    ] {
      for venue in band.locations() {
        assert!(is_known_location(venue), "{venue} missing from allow-list");
      }
    }
  }

  #[test]
  fn unknown_location_is_rejected() {
    assert!(!is_known_location("Dunkin"));
    assert!(!is_known_location(""));
  }
}
