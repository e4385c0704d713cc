//! Weather service integration
//!
//! Fetches current conditions for resolved coordinates from the OpenWeather
//! API, fixed to the imperial unit system.

pub mod client;
pub mod mock;

pub use client::OpenWeatherClient;
pub use mock::MockWeatherClient;

use crate::models::{Coordinates, WeatherReport};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Fetch current conditions.
    ///
    /// `Ok(None)` means the service answered with a non-success status;
    /// `Err` means the call failed or the body lacked the expected fields.
    async fn fetch(&self, coords: Coordinates) -> Result<Option<WeatherReport>>;
}
