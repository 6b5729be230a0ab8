//! Plain-text weather report

use std::fmt;

use integration_weather::{CurrentConditions, Place, WeatherCondition};

/// Current conditions for a resolved place, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    place: Place,
    current: CurrentConditions,
}

impl WeatherReport {
    /// Pair a geocoding match with the conditions fetched for it
    #[must_use]
    pub const fn new(place: Place, current: CurrentConditions) -> Self {
        Self { place, current }
    }

    /// The resolved place
    #[must_use]
    pub const fn place(&self) -> &Place {
        &self.place
    }

    /// The observed conditions
    #[must_use]
    pub const fn current(&self) -> &CurrentConditions {
        &self.current
    }

    /// Interpreted weather code
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        self.current.condition()
    }

    /// Render the report with surrounding whitespace removed
    #[must_use]
    pub fn into_text(self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = &self.current;
        writeln!(f, "Weather for {}, {}:", self.place.name, self.place.country)?;
        writeln!(f, "- Condition: {}", self.condition())?;
        writeln!(f, "- Temperature: {}°C", current.temperature)?;
        writeln!(f, "- Feels like: {}°C", current.apparent_temperature)?;
        writeln!(f, "- Humidity: {}%", current.humidity)?;
        writeln!(f, "- Wind Speed: {} km/h", current.wind_speed)?;
        write!(f, "- Precipitation: {} mm", current.precipitation)
    }
}
