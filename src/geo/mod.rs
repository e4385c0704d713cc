//! Geocoding service integration
//!
//! Resolves a free-text address to geographic coordinates via the Google
//! Maps geocoding API.

pub mod client;
pub mod mock;

pub use client::GoogleGeocodeClient;
pub use mock::MockGeocodeClient;

use crate::models::Coordinates;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GeocodeService: Send + Sync {
    /// Resolve an address to coordinates.
    ///
    /// `Ok(None)` means the service answered but had no match (non-success
    /// status or an empty result set); `Err` means the call or the response
    /// body itself was broken.
    async fn resolve(&self, address: &str) -> Result<Option<Coordinates>>;
}
