//! Weather Verse - weather lookups and AI-generated stories about places
//!
//! A single submission takes a free-text place name and one action, calls
//! the matching remote services in sequence, and renders either a weather
//! panel, a block of generated prose, or a generated image.

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod prompts;
pub mod weather;

pub use error::{Error, Result};
