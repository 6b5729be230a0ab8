//! Weather data models
//!
//! Public types handed to callers plus the raw Open-Meteo response shapes.

use std::fmt;

use domain::GeoLocation;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::{WeatherCondition, WeatherError};

/// A numeric reading kept exactly as Open-Meteo sent it
///
/// Displaying a `Measurement` reproduces the JSON literal, so `15.0` renders
/// as `15.0` and an integral humidity of `75` renders as `75`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurement(Number);

impl Measurement {
    /// Build a measurement from a float; `None` for NaN or infinity
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    /// The reading as a float
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl From<i64> for Measurement {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Best geocoding match for a place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Coordinates of the match
    pub location: GeoLocation,
    /// Display name as resolved by the geocoder
    pub name: String,
    /// Country name, empty when the geocoder did not report one
    pub country: String,
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2 m in °C
    pub temperature: Measurement,
    /// Apparent (feels like) temperature in °C
    pub apparent_temperature: Measurement,
    /// Relative humidity at 2 m in %
    pub humidity: Measurement,
    /// Precipitation in mm
    pub precipitation: Measurement,
    /// Wind speed at 10 m in km/h
    pub wind_speed: Measurement,
    /// WMO weather code
    pub weather_code: i64,
}

impl CurrentConditions {
    /// Interpreted weather code
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_wmo_code(self.weather_code)
    }
}

/// Raw geocoding response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResponse {
    /// Absent when nothing matched
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

/// Raw geocoding match
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

impl TryFrom<GeocodingResult> for Place {
    type Error = WeatherError;

    fn try_from(raw: GeocodingResult) -> Result<Self, Self::Error> {
        Ok(Self {
            location: GeoLocation::new(raw.latitude, raw.longitude)?,
            name: raw.name,
            country: raw.country.unwrap_or_default(),
        })
    }
}

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub current: Option<CurrentData>,
}

/// Raw `current` block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentData {
    pub temperature_2m: Measurement,
    pub relative_humidity_2m: Measurement,
    pub apparent_temperature: Measurement,
    pub precipitation: Measurement,
    pub weather_code: i64,
    pub wind_speed_10m: Measurement,
}

impl From<CurrentData> for CurrentConditions {
    fn from(raw: CurrentData) -> Self {
        Self {
            temperature: raw.temperature_2m,
            apparent_temperature: raw.apparent_temperature,
            humidity: raw.relative_humidity_2m,
            precipitation: raw.precipitation,
            wind_speed: raw.wind_speed_10m,
            weather_code: raw.weather_code,
        }
    }
}

/// Error body Open-Meteo returns with 4xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub reason: String,
}
