//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo geocoding API (<https://open-meteo.com/en/docs/geocoding-api>)
//! and the forecast API's `current` block (<https://open-meteo.com/en/docs>).
//! Neither endpoint requires an API key.
//!
//! # Architecture
//!
//! [`GeocodingClient`] turns a place name into the best matching [`Place`];
//! [`WeatherClient`] fetches [`CurrentConditions`] for coordinates. Both are
//! implemented by [`OpenMeteoClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_weather::{GeocodingClient, OpenMeteoClient, WeatherClient};
//!
//! let client = OpenMeteoClient::with_defaults()?;
//! if let Some(place) = client.search("London").await? {
//!     let current = client.get_current(&place.location).await?;
//!     println!("{}: {}", place.name, current.condition());
//! }
//! ```

mod client;
mod config;
mod error;
mod models;
mod weather_code;

pub use client::{GeocodingClient, OpenMeteoClient, WeatherClient};
pub use config::WeatherConfig;
pub use error::WeatherError;
pub use models::{CurrentConditions, Measurement, Place};
pub use weather_code::WeatherCondition;
