//! Tool error types

use domain::DomainError;
use integration_weather::WeatherError;
use thiserror::Error;

/// Errors reported to the tool host
///
/// Lookup failures are not among them: those are rendered into the tool's
/// text output instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool arguments did not match the parameter schema
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for ToolError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Failure somewhere in the lookup pipeline
#[derive(Debug, Error)]
pub enum LookupError {
    /// The location input was rejected before any request
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding or forecast request failed
    #[error(transparent)]
    Weather(#[from] WeatherError),
}
