//! Weather client error types

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while talking to Open-Meteo
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the service could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request was sent but failed or was rejected
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Response body could not be parsed or lacked required data
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Coordinates outside the valid ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable (HTTP 5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl From<DomainError> for WeatherError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCoordinates => Self::InvalidCoordinates,
            DomainError::EmptyLocation => Self::RequestFailed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = WeatherError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");

        let err = WeatherError::ParseError("missing field `current`".to_string());
        assert!(err.to_string().contains("missing field"));

        assert_eq!(
            WeatherError::RateLimitExceeded.to_string(),
            "Rate limit exceeded"
        );
    }

    #[test]
    fn domain_errors_convert() {
        let err: WeatherError = DomainError::InvalidCoordinates.into();
        assert!(matches!(err, WeatherError::InvalidCoordinates));

        let err: WeatherError = DomainError::EmptyLocation.into();
        assert!(matches!(err, WeatherError::RequestFailed(_)));
    }
}
