//! Submission dispatch: validate the address, run the selected action's
//! remote calls in sequence, and produce an outcome or a fixed failure.

use crate::ai::{HfChatClient, HfImageClient, ImageGenerationService, TextGenerationService};
use crate::config::Config;
use crate::geo::{GeocodeService, GoogleGeocodeClient};
use crate::models::{Action, Failure, Outcome, TextContext};
use crate::prompts;
use crate::weather::{OpenWeatherClient, WeatherService};
use tracing::{error, info, warn};

/// Runs one submission at a time over injected service dependencies.
///
/// Holds no state between submissions; the only process-wide state is the
/// configuration the concrete clients were built from.
pub struct App {
    geocoder: Box<dyn GeocodeService>,
    weather: Box<dyn WeatherService>,
    text_gen: Box<dyn TextGenerationService>,
    image_gen: Box<dyn ImageGenerationService>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub geocoder: Box<dyn GeocodeService>,
    pub weather: Box<dyn WeatherService>,
    pub text_gen: Box<dyn TextGenerationService>,
    pub image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            geocoder: services.geocoder,
            weather: services.weather,
            text_gen: services.text_gen,
            image_gen: services.image_gen,
        }
    }

    /// Construct an app wiring each remote service to its real client.
    pub fn new(config: &Config) -> Self {
        Self::with_services(AppServices {
            geocoder: Box::new(GoogleGeocodeClient::new(config.geocoding_api_key.clone())),
            weather: Box::new(OpenWeatherClient::new(config.weather_api_key.clone())),
            text_gen: Box::new(HfChatClient::new(config.inference_api_key.clone())),
            image_gen: Box::new(HfImageClient::new(config.inference_api_key.clone())),
        })
    }

    /// Run one submission.
    ///
    /// An empty address is rejected before any network call. Each action's
    /// calls run strictly in sequence, nothing is retried, and every remote
    /// failure is converted to the fixed [`Failure`] for that branch.
    pub async fn dispatch(
        &self,
        address: &str,
        action: Action,
    ) -> std::result::Result<Outcome, Failure> {
        let address = address.trim();
        if address.is_empty() {
            return Err(Failure::EmptyAddress);
        }

        info!(?action, "Dispatching submission");

        match action {
            Action::CurrentSkies => self.current_skies(address).await,
            Action::WeatherWords => self.generate_text(TextContext::Weather, address).await,
            Action::PlaceTales => self.generate_text(TextContext::Place, address).await,
            Action::AiVision => self.ai_vision(address).await,
        }
    }

    async fn current_skies(&self, address: &str) -> std::result::Result<Outcome, Failure> {
        let coords = match self.geocoder.resolve(address).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                warn!("No geocoding result for address");
                return Err(Failure::Geocode);
            }
            Err(e) => {
                error!("Geocoding failed: {}", e);
                return Err(Failure::Geocode);
            }
        };

        match self.weather.fetch(coords).await {
            Ok(Some(report)) => Ok(Outcome::Weather(report)),
            Ok(None) => {
                warn!("No weather result for coordinates");
                Err(Failure::Weather)
            }
            Err(e) => {
                error!("Weather fetch failed: {}", e);
                Err(Failure::Weather)
            }
        }
    }

    async fn generate_text(
        &self,
        context: TextContext,
        address: &str,
    ) -> std::result::Result<Outcome, Failure> {
        let body = match self.text_gen.generate(context, address).await {
            Ok(text) => text,
            Err(e) => {
                error!("Text generation failed: {}", e);
                return Err(Failure::TextGeneration(context));
            }
        };

        if body.trim().is_empty() {
            warn!("Text generation returned empty content");
            return Err(Failure::TextGeneration(context));
        }

        let heading = match context {
            TextContext::Weather => format!("Weather Words for {}:", address),
            TextContext::Place => format!("{} Tales:", address),
        };

        Ok(Outcome::Text { heading, body })
    }

    async fn ai_vision(&self, address: &str) -> std::result::Result<Outcome, Failure> {
        let prompt = prompts::render(prompts::AI_VISION, &[("location", address)]);

        let bytes = match self.image_gen.generate(&prompt).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Image generation failed: {}", e);
                return Err(Failure::ImageGeneration);
            }
        };

        // An error payload instead of image bytes must fail here, never
        // pass through as a corrupt image.
        let image = match image::load_from_memory(&bytes) {
            Ok(image) => image,
            Err(e) => {
                error!("Generated image is not decodable: {}", e);
                return Err(Failure::ImageGeneration);
            }
        };

        Ok(Outcome::Vision {
            image,
            caption: format!("AI Representation of {} in next 100 years.", address),
        })
    }
}
