use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu entries, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    CurrentLocation,
    PlaceName,
    Coordinates,
    Exit,
}

impl Mode {
    /// Parse the raw menu answer. Anything but `1`..`4` is `None`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Mode::CurrentLocation),
            "2" => Some(Mode::PlaceName),
            "3" => Some(Mode::Coordinates),
            "4" => Some(Mode::Exit),
            _ => None,
        }
    }
}

/// ISO 3166-1 alpha-2 code, always two uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iso2Code(String);

impl Iso2Code {
    /// Accepts exactly two ASCII letters in either case.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(code.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iso2Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Iso2Code {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Iso2Code::parse(&value).ok_or_else(|| format!("'{value}' is not a two-letter country code"))
    }
}

impl From<Iso2Code> for String {
    fn from(code: Iso2Code) -> Self {
        code.0
    }
}

/// What the weather provider is asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Place { city: String, country: Iso2Code },
    Coordinates { lat: f64, lon: f64 },
}

impl LocationQuery {
    pub fn place(city: impl Into<String>, country: Iso2Code) -> Self {
        LocationQuery::Place { city: city.into(), country }
    }

    /// `"{city},{CC}"` for place queries, `None` for coordinates.
    pub fn place_query(&self) -> Option<String> {
        match self {
            LocationQuery::Place { city, country } => Some(format!("{city},{country}")),
            LocationQuery::Coordinates { .. } => None,
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::Place { city, country } => write!(f, "{city},{country}"),
            LocationQuery::Coordinates { lat, lon } => write!(f, "({lat}, {lon})"),
        }
    }
}

/// Current conditions as printed to the user. Temperatures are Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub status: String,
    pub temp_c: f64,
    pub max_c: f64,
    pub min_c: f64,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReport {
    /// The five-line summary, without a trailing newline.
    pub fn summary_lines(&self) -> [String; 5] {
        [
            format!("Today's weather in {}:", self.location_name),
            format!("Status: {}", self.status),
            format!("Temperature: {}°C", self.temp_c),
            format!("Max Temperature: {}°C", self.max_c),
            format!("Min Temperature: {}°C", self.min_c),
        ]
    }
}
