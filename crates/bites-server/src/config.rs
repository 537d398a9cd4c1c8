//! Server configuration, loaded from a TOML file layered with
//! `BITES_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,

  #[serde(default = "default_port")]
  pub port: u16,

  /// Path to the SQLite database file; a leading `~` is expanded.
  #[serde(default = "default_db_path")]
  pub db_path: PathBuf,

  /// OpenWeatherMap API key. Required — there is no anonymous tier.
  pub weather_api_key: String,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 5000 }

fn default_db_path() -> PathBuf {
  PathBuf::from("~/.local/share/bites/reviews.db")
}

/// Layer the TOML file (optional) under `BITES_*` environment
/// variables and deserialise.
pub fn load(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = ::config::Config::builder()
    .add_source(::config::File::from(path.to_path_buf()).required(false))
    .add_source(::config::Environment::with_prefix("BITES"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}
