//! Weather lookup tool
//!
//! Wraps the Open-Meteo integration in a single string-in, string-out
//! operation suitable for an agent tool registry:
//!
//! 1. resolve the location name to coordinates (geocoding)
//! 2. fetch the current conditions for those coordinates
//! 3. interpret the WMO weather code
//! 4. render a short plain-text report
//!
//! Every outcome is returned as text. A location the geocoder does not know
//! yields `Could not find location: ...`; any other failure yields
//! `Error fetching weather data: ...`.
//!
//! # Example
//!
//! ```rust,ignore
//! use weather_tool::{AppConfig, WeatherTool};
//!
//! let config = AppConfig::load(None)?;
//! let tool = WeatherTool::from_config(config.weather)?;
//! println!("{}", tool.run("London").await);
//! ```

mod config;
mod error;
mod lookup;
mod report;
mod tool;

pub use config::{AppConfig, LogFormat, LoggingConfig};
pub use error::{LookupError, ToolError};
pub use lookup::WeatherTool;
pub use report::WeatherReport;
pub use tool::{Tool, ToolDefinition};
