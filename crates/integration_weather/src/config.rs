//! Weather client configuration

use serde::{Deserialize, Serialize};

/// Open-Meteo client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for place names returned by the geocoder (default: "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    concat!("weather-tool/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
            user_agent: default_user_agent(),
        }
    }
}

impl WeatherConfig {
    /// Point both endpoints at the same base URL (mock servers, proxies)
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            geocoding_base_url: base_url.clone(),
            forecast_base_url: base_url,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(
            config.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.language, "en");
        assert!(config.user_agent.starts_with("weather-tool/"));
    }

    #[test]
    fn test_with_base_url() {
        let config = WeatherConfig::with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.geocoding_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.forecast_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"timeout_secs": 5}"#).expect("should deserialize");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.language, "en");
    }
}
