use super::WeatherService;
use crate::models::{Coordinates, WeatherReport};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const WEATHER_PATH: &str = "/data/2.5/weather";

pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeather current-conditions response, reduced to the fields we
/// render. `main.temp` and `name` are required; a body missing them fails
/// deserialization rather than defaulting.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn fetch(&self, coords: Coordinates) -> Result<Option<WeatherReport>> {
        tracing::debug!(lat = coords.lat, lon = coords.lng, "Sending weather request");

        let url = format!("{}{}", self.base_url, WEATHER_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coords.lat.to_string()),
                ("lon", coords.lng.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send weather request: {}", e);
                e
            })?;

        if !response.status().is_success() {
            tracing::warn!("Weather API returned status {}", response.status());
            return Ok(None);
        }

        let body = response.text().await?;
        let parsed: WeatherResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse weather response: {}", e);
            Error::Weather(format!("Failed to parse weather response: {}", e))
        })?;

        let condition = parsed
            .weather
            .first()
            .map(|c| c.description.clone())
            .ok_or_else(|| Error::Weather("Weather response has no conditions".to_string()))?;

        Ok(Some(WeatherReport {
            name: parsed.name,
            temp_f: parsed.main.temp,
            condition,
        }))
    }
}
