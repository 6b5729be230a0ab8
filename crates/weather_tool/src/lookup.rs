//! Weather lookup pipeline

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::LocationQuery;
use integration_weather::{GeocodingClient, OpenMeteoClient, WeatherClient, WeatherConfig};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use crate::{
    error::{LookupError, ToolError},
    report::WeatherReport,
    tool::{Tool, ToolDefinition},
};

const TOOL_NAME: &str = "Weather Tool";
const TOOL_DESCRIPTION: &str = "Get current weather information for a specific location. \
                                Provide a city name or location to retrieve weather data.";
const LOCATION_DESCRIPTION: &str = "City name or location to get weather for";

/// Arguments accepted by [`WeatherTool::call`](Tool::call)
#[derive(Debug, Deserialize)]
struct WeatherArgs {
    location: String,
}

/// Current-weather lookup tool
///
/// Each [`run`](Self::run) resolves the location, then fetches conditions for
/// the resolved coordinates. The two requests are strictly sequential and
/// nothing is cached between invocations.
pub struct WeatherTool {
    geocoder: Arc<dyn GeocodingClient>,
    weather: Arc<dyn WeatherClient>,
}

impl fmt::Debug for WeatherTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherTool")
            .field("geocoder", &"<GeocodingClient>")
            .field("weather", &"<WeatherClient>")
            .finish()
    }
}

impl WeatherTool {
    /// Create a tool from explicit client implementations
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingClient>, weather: Arc<dyn WeatherClient>) -> Self {
        Self { geocoder, weather }
    }

    /// Create a tool backed by one Open-Meteo client for both lookups
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Configuration`] if the HTTP client cannot be built.
    pub fn from_config(config: WeatherConfig) -> Result<Self, ToolError> {
        let client = Arc::new(
            OpenMeteoClient::new(config).map_err(|e| ToolError::Configuration(e.to_string()))?,
        );
        Ok(Self::new(client.clone(), client))
    }

    /// Look up the current weather for `location`
    ///
    /// Always returns text: the report, a not-found line, or a line
    /// starting with `Error fetching weather data: `.
    #[instrument(skip(self))]
    pub async fn run(&self, location: &str) -> String {
        info!("Weather lookup started");

        match self.lookup(location).await {
            Ok(Some(report)) => {
                info!(
                    resolved = %report.place().name,
                    condition = %report.condition(),
                    "Weather lookup completed"
                );
                report.into_text()
            },
            Ok(None) => {
                info!("Location not found");
                format!("Could not find location: {location}")
            },
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                format!("Error fetching weather data: {e}")
            },
        }
    }

    async fn lookup(&self, location: &str) -> Result<Option<WeatherReport>, LookupError> {
        let query = LocationQuery::new(location)?;

        let Some(place) = self.geocoder.search(query.search_term()).await? else {
            return Ok(None);
        };

        let current = self.weather.get_current(&place.location).await?;
        Ok(Some(WeatherReport::new(place, current)))
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": LOCATION_DESCRIPTION
                    }
                },
                "required": ["location"]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<String, ToolError> {
        let args: WeatherArgs =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        Ok(self.run(&args.location).await)
    }
}
