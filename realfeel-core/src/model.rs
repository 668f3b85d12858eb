use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::RealFeelError;

/// A validated geographic point.
///
/// Fields are private so the only way to get one is through [`Coordinate::new`]
/// or [`crate::validation::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
    pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, RealFeelError> {
        if !latitude.is_finite() || !Self::LATITUDE_RANGE.contains(&latitude) {
            return Err(RealFeelError::invalid_coordinate(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !Self::LONGITUDE_RANGE.contains(&longitude) {
            return Err(RealFeelError::invalid_coordinate(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Normalized current observation for one point.
///
/// `solar_signal` is passed through in the provider's unit (minutes of
/// sunshine over the last hour for Bright Sky).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherMeasurement {
    pub timestamp: DateTime<FixedOffset>,
    pub temperature: f64,
    pub relative_humidity: f64,
    /// km/h
    pub wind_speed: f64,
    pub solar_signal: f64,
    pub cloud_cover: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealFeelResult {
    /// °C, one decimal.
    pub real_feel: f64,
    pub measurements: WeatherMeasurement,
}

/// A named location from the city catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new<S: Into<String>>(name: S, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), lat, lon }
    }

    pub fn coordinate(&self) -> Result<Coordinate, RealFeelError> {
        Coordinate::new(self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accepts_inclusive_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_out_of_range_and_non_finite() {
        for (lat, lon) in [
            (90.0001, 0.0),
            (-91.0, 0.0),
            (0.0, 180.5),
            (0.0, -181.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
        ] {
            let err = Coordinate::new(lat, lon).unwrap_err();
            assert!(matches!(err, RealFeelError::InvalidCoordinate { .. }), "{lat}, {lon}");
        }
    }

    #[test]
    fn measurement_serializes_camel_case() {
        let m = WeatherMeasurement {
            timestamp: DateTime::parse_from_rfc3339("2024-07-01T12:00:00+02:00").unwrap(),
            temperature: 21.5,
            relative_humidity: 55.0,
            wind_speed: 7.2,
            solar_signal: 30.0,
            cloud_cover: 25.0,
        };

        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["relativeHumidity"], 55.0);
        assert_eq!(json["windSpeed"], 7.2);
        assert_eq!(json["solarSignal"], 30.0);
        assert_eq!(json["cloudCover"], 25.0);
        assert_eq!(json["timestamp"], "2024-07-01T12:00:00+02:00");
    }
}
