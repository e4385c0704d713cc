use super::TextGenerationService;
use crate::models::TextContext;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const CHAT_PATH: &str = "/v1/chat/completions";
const CHAT_MODEL: &str = "microsoft/Phi-3-mini-4k-instruct";
const MAX_TOKENS: u32 = 500;

pub struct HfChatClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl HfChatClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
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

    async fn chat_completion(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        tracing::debug!("Sending chat completion request");

        let url = format!("{}{}", self.base_url, CHAT_PATH);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send chat completion request: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Inference API error (status {}): {}", status, error_text);
            return Err(Error::Inference(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse chat completion response: {}", e);
            Error::Inference(format!("Failed to parse chat completion response: {}", e))
        })
    }
}

#[async_trait]
impl TextGenerationService for HfChatClient {
    async fn generate(&self, context: TextContext, location: &str) -> Result<String> {
        let template = match context {
            TextContext::Weather => prompts::WEATHER_WORDS,
            TextContext::Place => prompts::PLACE_TALES,
        };
        let prompt = prompts::render(template, &[("location", location)]);

        let request = ChatCompletionRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt),
            }],
            max_tokens: MAX_TOKENS,
        };

        let response = self.chat_completion(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| Error::Inference("No completion in chat response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_parses_first_completion() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": "Rain whispers over Kyoto tonight."
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = HfChatClient::new("test-key".to_string()).with_base_url(server.uri());

        let text = client.generate(TextContext::Weather, "Kyoto").await.unwrap();
        assert_eq!(text, "Rain whispers over Kyoto tonight.");
    }

    #[tokio::test]
    async fn test_generate_embeds_location_in_prompt() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("Generate a creative text about Lagos."))
            .and(body_string_contains("\"max_tokens\":500"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "Lagos hums." }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HfChatClient::new("key".to_string()).with_base_url(server.uri());

        client.generate(TextContext::Place, "Lagos").await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_is_inference_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = HfChatClient::new("key".to_string()).with_base_url(server.uri());

        let err = client.generate(TextContext::Weather, "Oslo").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_inference_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = HfChatClient::new("key".to_string()).with_base_url(server.uri());

        let err = client.generate(TextContext::Place, "Oslo").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }
}
