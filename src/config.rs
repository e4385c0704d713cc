//! Process configuration loaded once at startup.

use crate::{Error, Result};

/// API keys for the three remote services.
///
/// Loaded once at startup and treated as immutable for the process
/// lifetime. A missing key is fatal before any dispatch runs, never a
/// deferred failure on first use.
#[derive(Debug, Clone)]
pub struct Config {
    pub geocoding_api_key: String,
    pub weather_api_key: String,
    pub inference_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            geocoding_api_key: require_env("GOOGLE_MAPS_API_KEY")?,
            weather_api_key: require_env("OPENWEATHER_API_KEY")?,
            inference_api_key: require_env("HF_KEY")?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Configuration(format!("{} not set", name)))
}
