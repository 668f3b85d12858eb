use thiserror::Error;

/// Failures of the real feel pipeline.
///
/// Each variant keeps its identity all the way to the caller so the HTTP
/// boundary can map it to its own status and message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RealFeelError {
    /// Latitude/longitude missing, non-numeric or out of range.
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Transport failure talking to the weather provider.
    #[error("Weather provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    /// The provider answered, but without a usable measurement payload.
    #[error("Malformed weather data: {message}")]
    MalformedWeatherData { message: String },
}

impl RealFeelError {
    pub fn invalid_coordinate<S: Into<String>>(message: S) -> Self {
        Self::InvalidCoordinate { message: message.into() }
    }

    pub fn provider_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ProviderUnavailable { message: message.into() }
    }

    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedWeatherData { message: message.into() }
    }

    /// Stable machine-readable code, e.g. for JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            RealFeelError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            RealFeelError::ProviderUnavailable { .. } => "PROVIDER_UNAVAILABLE",
            RealFeelError::MalformedWeatherData { .. } => "MALFORMED_WEATHER_DATA",
        }
    }

    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            RealFeelError::InvalidCoordinate { .. } => {
                "Invalid latitude or longitude. Please provide valid values."
            }
            RealFeelError::ProviderUnavailable { .. } => "Failed to retrieve weather data.",
            RealFeelError::MalformedWeatherData { .. } => {
                "Weather data is unavailable in the response."
            }
        }
    }
}
