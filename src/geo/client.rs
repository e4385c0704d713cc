use super::GeocodeService;
use crate::models::Coordinates;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const GEOCODE_PATH: &str = "/maps/api/geocode/json";

pub struct GoogleGeocodeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

impl GoogleGeocodeClient {
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
impl GeocodeService for GoogleGeocodeClient {
    async fn resolve(&self, address: &str) -> Result<Option<Coordinates>> {
        tracing::debug!("Sending geocoding request for address");

        let url = format!("{}{}", self.base_url, GEOCODE_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("address", address), ("key", &self.api_key)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send geocoding request: {}", e);
                e
            })?;

        if !response.status().is_success() {
            tracing::warn!("Geocoding API returned status {}", response.status());
            return Ok(None);
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse geocoding response: {}", e);
            Error::Geocode(format!("Failed to parse geocoding response: {}", e))
        })?;

        Ok(parsed
            .results
            .first()
            .map(|result| result.geometry.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolve_returns_first_result_coordinates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .and(query_param("address", "New York"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "geometry": { "location": { "lat": 40.7, "lng": -74.0 } } },
                    { "geometry": { "location": { "lat": 0.0, "lng": 0.0 } } }
                ]
            })))
            .mount(&server)
            .await;

        let client =
            GoogleGeocodeClient::new("test-key".to_string()).with_base_url(server.uri());

        let coords = client.resolve("New York").await.unwrap().unwrap();
        assert_eq!(coords.lat, 40.7);
        assert_eq!(coords.lng, -74.0);
    }

    #[tokio::test]
    async fn test_resolve_empty_result_set_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "results": [], "status": "ZERO_RESULTS" })),
            )
            .mount(&server)
            .await;

        let client = GoogleGeocodeClient::new("key".to_string()).with_base_url(server.uri());

        assert!(client.resolve("nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_http_failure_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let client = GoogleGeocodeClient::new("key".to_string()).with_base_url(server.uri());

        assert!(client.resolve("anywhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_malformed_body_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = GoogleGeocodeClient::new("key".to_string()).with_base_url(server.uri());

        let err = client.resolve("anywhere").await.unwrap_err();
        assert!(matches!(err, Error::Geocode(_)));
    }
}
