//! Open-Meteo client
//!
//! HTTP client for the Open-Meteo geocoding and forecast APIs.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::{ApiErrorBody, CurrentConditions, ForecastResponse, GeocodingResponse, Place};

/// Variables requested in the forecast API's `current` block
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                              precipitation,weather_code,wind_speed_10m";

/// Resolves place names to coordinates
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Look up the single best match for `name`
    ///
    /// Returns `Ok(None)` when the geocoder knows no such place.
    async fn search(&self, name: &str) -> Result<Option<Place>, WeatherError>;
}

/// Fetches current observations for coordinates
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current conditions at a location
    async fn get_current(&self, location: &GeoLocation) -> Result<CurrentConditions, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Issue a GET request and decode a JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        debug!(url = %url, ?params, "Sending Open-Meteo request");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let response = Self::check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn map_send_error(&self, err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// Map non-success statuses to errors
    async fn check_status(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!(%status, url = %response.url(), "Open-Meteo returned an error status");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let reason = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.reason);

        Err(WeatherError::RequestFailed(match reason {
            Some(reason) => format!("HTTP {status}: {reason}"),
            None => format!("HTTP {status}"),
        }))
    }

    fn geocoding_params(&self, name: &str) -> Vec<(&'static str, String)> {
        vec![
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", self.config.language.clone()),
            ("format", "json".to_string()),
        ]
    }

    fn current_params(location: &GeoLocation) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn search(&self, name: &str) -> Result<Option<Place>, WeatherError> {
        let url = format!("{}/search", self.config.geocoding_base_url);
        let response: GeocodingResponse = self.get_json(&url, &self.geocoding_params(name)).await?;

        let Some(first) = response.results.and_then(|results| results.into_iter().next()) else {
            debug!(%name, "No geocoding match");
            return Ok(None);
        };

        let place = Place::try_from(first)?;
        debug!(
            %name,
            resolved = %place.name,
            country = %place.country,
            location = %place.location,
            "Geocoded place"
        );
        Ok(Some(place))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn get_current(&self, location: &GeoLocation) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/forecast", self.config.forecast_base_url);
        let response: ForecastResponse = self.get_json(&url, &Self::current_params(location)).await?;

        let current = response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        Ok(current.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenMeteoClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_geocoding_params() {
        let client = OpenMeteoClient::with_defaults().expect("client creation should succeed");
        let params = client.geocoding_params("São Paulo");

        assert_eq!(
            params,
            vec![
                ("name", "São Paulo".to_string()),
                ("count", "1".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_geocoding_params_follow_configured_language() {
        let config = WeatherConfig {
            language: "de".to_string(),
            ..Default::default()
        };
        let client = OpenMeteoClient::new(config).expect("client creation should succeed");
        let params = client.geocoding_params("Berlin");
        assert!(params.contains(&("language", "de".to_string())));
    }

    #[test]
    fn test_current_params() {
        let location = GeoLocation::new(51.5, -0.12).expect("valid coordinates");
        let params = OpenMeteoClient::current_params(&location);

        assert!(params.contains(&("latitude", "51.5".to_string())));
        assert!(params.contains(&("longitude", "-0.12".to_string())));
        assert!(params.contains(&("timezone", "auto".to_string())));
        assert!(params.contains(&(
            "current",
            "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m"
                .to_string()
        )));
    }

    #[test]
    fn test_config_accessor() {
        let client = OpenMeteoClient::new(WeatherConfig::with_base_url("http://localhost:9"))
            .expect("client creation should succeed");
        assert_eq!(client.config().forecast_base_url, "http://localhost:9");
    }
}
