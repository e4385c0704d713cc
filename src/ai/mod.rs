//! Hosted inference integration for text and image generation
//!
//! Provides interfaces to the Hugging Face inference API: chat completions
//! for generated prose and a hosted diffusion model for generated images.

pub mod chat;
pub mod image;
pub mod mock;

pub use chat::HfChatClient;
pub use image::HfImageClient;
pub use mock::{MockImageClient, MockTextClient};

use crate::models::TextContext;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generate prose about the weather at, or the character of, a place.
    async fn generate(&self, context: TextContext, location: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate an image for a prompt, returning the raw response bytes.
    /// Decoding is the caller's concern.
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>>;
}
