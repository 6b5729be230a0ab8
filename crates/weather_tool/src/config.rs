//! Application configuration
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables prefixed with `WEATHER_TOOL_` (nested keys separated by `__`,
//! e.g. `WEATHER_TOOL_WEATHER__TIMEOUT_SECS=10`).

use std::path::Path;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "WEATHER_TOOL";

/// Complete configuration for the weather tool and its CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file and the process environment
    ///
    /// With `path` the file must exist. Without it, `config.toml` in the
    /// working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Configuration`] if a source cannot be read or
    /// parsed, or if the result fails [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> Result<Self, ToolError> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map in place of the process
    /// environment (`None` reads the real environment)
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ToolError> {
        let file = match path {
            Some(path) => config::File::new(&path.to_string_lossy(), config::FileFormat::Toml),
            None => config::File::new("config.toml", config::FileFormat::Toml).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot work
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Configuration`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ToolError> {
        let urls = [
            ("weather.geocoding_base_url", &self.weather.geocoding_base_url),
            ("weather.forecast_base_url", &self.weather.forecast_base_url),
        ];
        for (key, url) in urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ToolError::Configuration(format!(
                    "{key} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.weather.timeout_secs == 0 {
            return Err(ToolError::Configuration(
                "weather.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
