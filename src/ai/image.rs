use super::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const MODEL_PATH: &str = "/models/stabilityai/stable-diffusion-3.5-large";

pub struct HfImageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest {
    inputs: String,
}

impl HfImageClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
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
impl ImageGenerationService for HfImageClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        tracing::debug!("Sending image generation request");

        let url = format!("{}{}", self.base_url, MODEL_PATH);
        let request = ImageGenerationRequest {
            inputs: prompt.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send image generation request: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Inference API image error (status {}): {}", status, error_text);
            return Err(Error::Inference(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_returns_raw_response_bytes() {
        let server = MockServer::start().await;

        let png_bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_string_contains("\"inputs\":"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes.clone()))
            .mount(&server)
            .await;

        let client = HfImageClient::new("test-key".to_string()).with_base_url(server.uri());

        let bytes = client.generate("a city in 100 years").await.unwrap();
        assert_eq!(bytes, png_bytes);
    }

    #[tokio::test]
    async fn test_generate_api_error_is_inference_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(serde_json::json!({ "error": "model loading" })),
            )
            .mount(&server)
            .await;

        let client = HfImageClient::new("key".to_string()).with_base_url(server.uri());

        let err = client.generate("a city").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }
}
