//! Core library for the `weather-app` console client.
//!
//! This crate defines:
//! - Configuration (API key, retry bound) and the error taxonomy
//! - Country name / ISO code normalization
//! - Clients for IP geolocation and current weather (OpenWeatherMap)
//! - The interactive session and the outer application loop
//!
//! It is used by `weather-app`, but the session can be driven by any
//! [`Console`] implementation.

pub mod app;
pub mod config;
pub mod console;
pub mod country;
pub mod error;
pub mod geolocation;
mod http;
pub mod model;
pub mod provider;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::{Config, StoredConfig};
pub use console::{Console, StdConsole};
pub use country::{ConversionError, to_iso2};
pub use error::WeatherAppError;
pub use geolocation::{Geolocator, IpInfoGeolocator, IpLocation};
pub use model::{Iso2Code, LocationQuery, Mode, WeatherReport};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use session::{FetchOutcome, InputSession, Selection};
