//! Core library for the `realfeel` service.
//!
//! This crate defines:
//! - Coordinate validation and season lookup
//! - The real feel model (heat index, wind chill, mild blend)
//! - The Bright Sky weather provider adapter
//! - The orchestrating service and the city catalog
//! - Configuration handling
//!
//! It is used by `realfeel-cli`, but can also be reused by other binaries or services.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod provider;
pub mod season;
pub mod validation;

pub use catalog::CityCatalog;
pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::RealFeelError;
pub use model::{City, Coordinate, RealFeelResult, Season, WeatherMeasurement};
pub use orchestrator::RealFeelService;
pub use provider::{WeatherProvider, brightsky::BrightSkyProvider, provider_from_config};
