use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    engine,
    error::RealFeelError,
    model::{Coordinate, RealFeelResult},
    provider::WeatherProvider,
    validation,
};

/// validate → fetch → compute.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct RealFeelService {
    provider: Arc<dyn WeatherProvider>,
}

impl RealFeelService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Full pipeline for raw, unparsed coordinates.
    ///
    /// The first failure is returned unchanged; an invalid coordinate never
    /// reaches the provider.
    #[tracing::instrument(skip(self))]
    pub async fn get_real_feel(&self, raw_lat: &str, raw_lon: &str) -> Result<RealFeelResult, RealFeelError> {
        let coordinate = validation::validate(raw_lat, raw_lon).inspect_err(|e| {
            warn!(error = %e, "rejected coordinate");
        })?;

        self.real_feel_at(&coordinate).await
    }

    /// Fetch and compute for an already validated coordinate.
    pub async fn real_feel_at(&self, coordinate: &Coordinate) -> Result<RealFeelResult, RealFeelError> {
        let measurements = self.provider.fetch(coordinate).await?;
        let real_feel = engine::compute_measurement(&measurements);

        info!(
            lat = coordinate.latitude(),
            lon = coordinate.longitude(),
            temperature = measurements.temperature,
            real_feel,
            "real feel ready"
        );

        Ok(RealFeelResult { real_feel, measurements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherMeasurement;
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records calls and replays a canned outcome.
    #[derive(Debug)]
    struct SpyProvider {
        calls: AtomicUsize,
        outcome: Result<WeatherMeasurement, RealFeelError>,
    }

    impl SpyProvider {
        fn returning(outcome: Result<WeatherMeasurement, RealFeelError>) -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), outcome })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for SpyProvider {
        async fn fetch(&self, _coordinate: &Coordinate) -> Result<WeatherMeasurement, RealFeelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn mild_summer() -> WeatherMeasurement {
        WeatherMeasurement {
            timestamp: DateTime::parse_from_rfc3339("2024-06-20T15:00:00+02:00").unwrap(),
            temperature: 20.0,
            relative_humidity: 50.0,
            wind_speed: 7.2,
            solar_signal: 60.0,
            cloud_cover: 0.0,
        }
    }

    #[tokio::test]
    async fn invalid_coordinates_never_reach_provider() {
        let spy = SpyProvider::returning(Ok(mild_summer()));
        let service = RealFeelService::new(spy.clone());

        for (lat, lon) in [("95", "10"), ("10", "-200"), ("north", "10"), ("", "")] {
            let err = service.get_real_feel(lat, lon).await.unwrap_err();
            assert!(matches!(err, RealFeelError::InvalidCoordinate { .. }));
        }

        assert_eq!(spy.calls(), 0);
    }

    #[tokio::test]
    async fn returns_value_and_measurements() {
        let spy = SpyProvider::returning(Ok(mild_summer()));
        let service = RealFeelService::new(spy.clone());

        let result = service.get_real_feel("50.1109", "8.6821").await.unwrap();

        assert_eq!(spy.calls(), 1);
        assert_eq!(result.measurements, mild_summer());
        assert_eq!(result.real_feel, engine::compute_measurement(&mild_summer()));
    }

    #[tokio::test]
    async fn provider_errors_propagate_unchanged() {
        for err in [
            RealFeelError::provider_unavailable("connection refused"),
            RealFeelError::malformed("response has no `weather` block"),
        ] {
            let spy = SpyProvider::returning(Err(err.clone()));
            let service = RealFeelService::new(spy.clone());

            let got = service.get_real_feel("52.52", "13.405").await.unwrap_err();
            assert_eq!(got, err);
            assert_eq!(spy.calls(), 1);
        }
    }

    #[tokio::test]
    async fn each_call_fetches_fresh() {
        let spy = SpyProvider::returning(Ok(mild_summer()));
        let service = RealFeelService::new(spy.clone());

        service.get_real_feel("52.52", "13.405").await.unwrap();
        service.get_real_feel("52.52", "13.405").await.unwrap();

        assert_eq!(spy.calls(), 2);
    }
}
