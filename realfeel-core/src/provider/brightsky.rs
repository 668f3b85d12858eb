use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    error::RealFeelError,
    model::{Coordinate, WeatherMeasurement},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.brightsky.dev";

/// Current weather from the Bright Sky API (DWD open data).
#[derive(Debug, Clone)]
pub struct BrightSkyProvider {
    base_url: String,
    http: Client,
}

impl BrightSkyProvider {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(DEFAULT_BASE_URL.to_string(), Duration::from_secs(10))
    }

    /// Point the provider at another host, e.g. a mock server in tests.
    pub fn with_settings(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("realfeel/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client for Bright Sky")?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    #[tracing::instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn fetch_current(&self, coordinate: &Coordinate) -> Result<WeatherMeasurement, RealFeelError> {
        let url = format!("{}/current_weather", self.base_url);
        debug!(%url, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("lat", coordinate.latitude()), ("lon", coordinate.longitude())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Bright Sky request failed");
                RealFeelError::provider_unavailable(format!("request to Bright Sky failed: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            RealFeelError::provider_unavailable(format!("failed to read Bright Sky response body: {e}"))
        })?;

        if !status.is_success() {
            warn!(%status, "Bright Sky returned an error status");
            return Err(RealFeelError::provider_unavailable(format!(
                "Bright Sky request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let measurement = parse_current_weather(&body)?;
        info!(
            timestamp = %measurement.timestamp,
            temperature = measurement.temperature,
            "fetched current weather"
        );

        Ok(measurement)
    }
}

#[derive(Debug, Deserialize)]
struct BsCurrentResponse {
    weather: Option<BsWeather>,
}

/// Only the fields we use; the rest of the payload is ignored.
#[derive(Debug, Deserialize)]
struct BsWeather {
    timestamp: Option<String>,
    temperature: Option<f64>,
    relative_humidity: Option<f64>,
    wind_speed_60: Option<f64>,
    sunshine_60: Option<f64>,
    cloud_cover: Option<f64>,
}

fn parse_current_weather(body: &str) -> Result<WeatherMeasurement, RealFeelError> {
    let parsed: BsCurrentResponse = serde_json::from_str(body).map_err(|e| {
        RealFeelError::malformed(format!("failed to parse Bright Sky JSON: {e}"))
    })?;

    let weather = parsed
        .weather
        .ok_or_else(|| RealFeelError::malformed("response has no `weather` block"))?;

    let raw_ts = required("timestamp", weather.timestamp)?;
    let timestamp = DateTime::<FixedOffset>::parse_from_rfc3339(&raw_ts)
        .map_err(|e| RealFeelError::malformed(format!("bad timestamp '{raw_ts}': {e}")))?;

    let measurement = WeatherMeasurement {
        timestamp,
        temperature: required("temperature", weather.temperature)?,
        relative_humidity: required("relative_humidity", weather.relative_humidity)?,
        wind_speed: required("wind_speed_60", weather.wind_speed_60)?,
        solar_signal: required("sunshine_60", weather.sunshine_60)?,
        cloud_cover: required("cloud_cover", weather.cloud_cover)?,
    };

    check_domain(&measurement)?;
    Ok(measurement)
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, RealFeelError> {
    value.ok_or_else(|| RealFeelError::malformed(format!("field `{field}` is missing or null")))
}

/// The engine only sees finite values inside their physical ranges.
fn check_domain(m: &WeatherMeasurement) -> Result<(), RealFeelError> {
    let checks = [
        ("temperature", m.temperature, f64::NEG_INFINITY, f64::INFINITY),
        ("relative_humidity", m.relative_humidity, 0.0, 100.0),
        ("wind_speed_60", m.wind_speed, 0.0, f64::INFINITY),
        ("sunshine_60", m.solar_signal, 0.0, f64::INFINITY),
        ("cloud_cover", m.cloud_cover, 0.0, 100.0),
    ];

    for (field, value, min, max) in checks {
        if !value.is_finite() || value < min || value > max {
            return Err(RealFeelError::malformed(format!("field `{field}` has invalid value {value}")));
        }
    }

    Ok(())
}

#[async_trait]
impl WeatherProvider for BrightSkyProvider {
    async fn fetch(&self, coordinate: &Coordinate) -> Result<WeatherMeasurement, RealFeelError> {
        self.fetch_current(coordinate).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
