//! The real feel model.
//!
//! Three temperature regimes, tried in order:
//! - heat index for `T >= 27`
//! - wind chill for `T <= 10`
//! - a mild-weather blend of humidity, cloud, sun and wind in between
//!
//! The solar divisors (`25`, `50`) are tuned for sunshine minutes per hour as
//! reported by Bright Sky, not physical constants.

use chrono::{DateTime, FixedOffset};

use crate::{
    model::{Season, WeatherMeasurement},
    season::season_of,
};

pub const HEAT_INDEX_THRESHOLD_C: f64 = 27.0;
pub const WIND_CHILL_THRESHOLD_C: f64 = 10.0;
/// Below this wind speed (m/s) wind chill is taken to be zero.
pub const WIND_CHILL_MIN_WIND_MPS: f64 = 1.4;

const KMH_PER_MPS: f64 = 3.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    HeatIndex,
    WindChill,
    Mild,
}

impl Regime {
    /// Evaluation order matters: the first matching rule wins.
    pub const ALL: [Regime; 3] = [Regime::HeatIndex, Regime::WindChill, Regime::Mild];

    fn applies(self, temperature: f64) -> bool {
        match self {
            Regime::HeatIndex => temperature >= HEAT_INDEX_THRESHOLD_C,
            Regime::WindChill => temperature <= WIND_CHILL_THRESHOLD_C,
            Regime::Mild => true,
        }
    }

    pub fn for_temperature(temperature: f64) -> Regime {
        Regime::ALL
            .into_iter()
            .find(|r| r.applies(temperature))
            .unwrap_or(Regime::Mild)
    }
}

/// Real feel in °C, rounded to one decimal.
///
/// `wind_speed_kmh` is converted to m/s internally. Inputs are expected to be
/// finite; the provider adapter guarantees that for fetched measurements.
pub fn compute(
    timestamp: &DateTime<FixedOffset>,
    temperature: f64,
    humidity: f64,
    wind_speed_kmh: f64,
    solar_signal: f64,
    cloud_cover: f64,
) -> f64 {
    let wind_mps = wind_speed_kmh / KMH_PER_MPS;
    let regime = Regime::for_temperature(temperature);

    let raw = match regime {
        Regime::HeatIndex => heat_index(temperature, humidity),
        Regime::WindChill => wind_chill(temperature, wind_mps),
        Regime::Mild => mild(
            season_of(timestamp),
            temperature,
            humidity,
            wind_mps,
            solar_signal,
            cloud_cover,
        ),
    };

    tracing::debug!(?regime, temperature, raw, "real feel computed");

    round_one_decimal(raw)
}

pub fn compute_measurement(m: &WeatherMeasurement) -> f64 {
    compute(
        &m.timestamp,
        m.temperature,
        m.relative_humidity,
        m.wind_speed,
        m.solar_signal,
        m.cloud_cover,
    )
}

/// Heat-index polynomial with the humidity term damped to 80%.
pub fn heat_index(t: f64, h: f64) -> f64 {
    let t2 = t * t;
    let h2 = h * h;

    -42.379 + 2.04901523 * t + (0.8 * 10.14333127) * h
        - 0.22475541 * t * h
        - 0.00683783 * t2
        - 0.05481717 * h2
        + 0.00122874 * t2 * h
        + 0.00085282 * t * h2
        - 0.00000199 * t2 * h2
}

pub fn wind_chill(t: f64, wind_mps: f64) -> f64 {
    if wind_mps < WIND_CHILL_MIN_WIND_MPS {
        return t;
    }

    let v = wind_mps.powf(0.16);
    13.12 + 0.6215 * t - 11.37 * v + 0.3965 * t * v
}

fn mild(season: Season, t: f64, h: f64, wind_mps: f64, solar: f64, cloud: f64) -> f64 {
    let season_scale = match season {
        Season::Summer => 1.2,
        Season::Winter => 0.8,
        Season::Spring | Season::Autumn => 1.0,
    };
    let solar_factor = solar * (1.0 - cloud / 100.0) * season_scale;

    let base = t + (h / 100.0) * (5.0 - cloud / 20.0) + solar_factor / 25.0 - wind_mps / 2.0;

    match season {
        Season::Winter if t < 15.0 => base - wind_mps / 5.0,
        Season::Summer if t >= 15.0 => base + solar_factor / 50.0,
        _ => base,
    }
}

/// Half away from zero.
fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
