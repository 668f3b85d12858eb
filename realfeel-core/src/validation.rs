//! Parsing and range-checking of raw coordinates.

use crate::{error::RealFeelError, model::Coordinate};

/// Parse and validate a raw latitude/longitude pair.
///
/// Inputs are trimmed and must parse completely as `f64`; `"52.5abc"` is
/// rejected. Runs before any I/O.
pub fn validate(raw_lat: &str, raw_lon: &str) -> Result<Coordinate, RealFeelError> {
    let lat = parse_component("latitude", raw_lat)?;
    let lon = parse_component("longitude", raw_lon)?;

    Coordinate::new(lat, lon)
}

fn parse_component(name: &str, raw: &str) -> Result<f64, RealFeelError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RealFeelError::invalid_coordinate(format!("{name} is missing")));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| RealFeelError::invalid_coordinate(format!("{name} '{trimmed}' is not a number")))
}
