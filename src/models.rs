//! Data models and structures
//!
//! Defines the transient, request-scoped values that flow through a single
//! dispatch: the selected action, resolved coordinates, the weather report,
//! and the success/failure outcomes shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four user-selectable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Current weather conditions for the place.
    CurrentSkies,
    /// Generated prose about the weather at the place.
    WeatherWords,
    /// Generated prose about the place itself.
    PlaceTales,
    /// Generated image of the place 100 years from now.
    AiVision,
}

/// Which fixed prompt template the text generator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContext {
    Weather,
    Place,
}

impl std::fmt::Display for TextContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextContext::Weather => write!(f, "weather"),
            TextContext::Place => write!(f, "place"),
        }
    }
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Current conditions for a resolved location, read-only once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Location name as reported by the weather service.
    pub name: String,
    /// Temperature in Fahrenheit (the unit system is fixed to imperial).
    pub temp_f: f64,
    /// Description of the leading weather condition.
    pub condition: String,
}

/// Successful result of one dispatch, exactly one per submission.
#[derive(Debug)]
pub enum Outcome {
    Weather(WeatherReport),
    Text { heading: String, body: String },
    Vision { image: image::DynamicImage, caption: String },
}

/// User-facing failure of one dispatch.
///
/// Every remote-call failure is caught at the point of the call and
/// converted into one of these; transport errors never escape to the
/// presentation layer. The messages are fixed per failure branch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error("Please enter a location.")]
    EmptyAddress,

    #[error("Unable to fetch location coordinates. Please check the address.")]
    Geocode,

    #[error("Unable to fetch weather information. Please try again.")]
    Weather,

    #[error("Unable to generate text about the {0}.")]
    TextGeneration(TextContext),

    #[error("Unable to generate an image for the place.")]
    ImageGeneration,
}
