use crate::{
    config::Config,
    error::RealFeelError,
    model::{Coordinate, WeatherMeasurement},
    provider::brightsky::BrightSkyProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod brightsky;

/// Source of current weather for a coordinate.
///
/// Implementations perform one fresh request per call; no caching, no retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, coordinate: &Coordinate) -> Result<WeatherMeasurement, RealFeelError>;
}

/// Construct the provider described by `config.provider`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = BrightSkyProvider::with_settings(
        config.provider.base_url.clone(),
        config.provider.timeout(),
    )?;

    Ok(Box::new(provider))
}
