//! One round of menu, location input, lookup and output.
//!
//! Every failed step (bad menu choice, unknown country, non-numeric coordinate,
//! failed geolocation or weather lookup) is logged, explained to the user and
//! followed by a fresh menu. Failures are counted against
//! [`Config::max_attempts`]; once the bound is hit the session gives up and the
//! caller is expected to start over with a new session.

use tracing::{debug, error, warn};

use crate::{
    config::Config,
    console::Console,
    country::to_iso2,
    error::{Result, WeatherAppError},
    geolocation::Geolocator,
    model::{Iso2Code, LocationQuery, Mode, WeatherReport},
    provider::WeatherProvider,
};

pub const MENU: [&str; 5] = [
    "Choose:",
    "1. get Current Weather",
    "2. get specific weather",
    "3. get weather by coordinates",
    "4. Exit",
];

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const COUNTRY_PROMPT: &str = "Enter the two-letter country code: ";
pub const CITY_PROMPT: &str = "Enter the City name: ";
pub const LATITUDE_PROMPT: &str = "Enter latitude: ";
pub const LONGITUDE_PROMPT: &str = "Enter longitude: ";
pub const GIVE_UP_MESSAGE: &str = "Too many failed attempts. Returning to the menu.";

/// Result of collecting input.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Query(LocationQuery),
    Exit,
    GaveUp,
}

/// Result of a lookup, including the ways it can end without a report.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Report(WeatherReport),
    Exit,
    GaveUp,
}

pub struct InputSession<'a> {
    config: &'a Config,
    geolocator: &'a dyn Geolocator,
    provider: &'a dyn WeatherProvider,
    console: &'a mut dyn Console,
    mode: Option<Mode>,
    query: Option<LocationQuery>,
    result: Option<WeatherReport>,
    failures: u32,
}

impl<'a> InputSession<'a> {
    pub fn new(
        config: &'a Config,
        geolocator: &'a dyn Geolocator,
        provider: &'a dyn WeatherProvider,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            config,
            geolocator,
            provider,
            console,
            mode: None,
            query: None,
            result: None,
            failures: 0,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn query(&self) -> Option<&LocationQuery> {
        self.query.as_ref()
    }

    pub fn result(&self) -> Option<&WeatherReport> {
        self.result.as_ref()
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Show the menu until the user picks a usable location or exits.
    ///
    /// Only console failures are returned as errors.
    pub async fn collect_input(&mut self) -> Result<Selection> {
        loop {
            if self.exhausted() {
                warn!("Giving up after {} failed attempts", self.failures);
                self.console.say(GIVE_UP_MESSAGE);
                return Ok(Selection::GaveUp);
            }

            match self.read_selection().await {
                Ok(Selection::Query(query)) => {
                    debug!("Resolved location query: {query}");
                    self.query = Some(query.clone());
                    return Ok(Selection::Query(query));
                }
                Ok(other) => return Ok(other),
                Err(err) if err.is_recoverable() => self.record_failure(&err),
                Err(err) => return Err(err),
            }
        }
    }

    /// Look up `query`, asking for a new location after every failed lookup.
    pub async fn fetch_weather(&mut self, query: LocationQuery) -> Result<FetchOutcome> {
        let mut query = query;
        loop {
            match self.provider.current(&query).await {
                Ok(report) => {
                    debug!(
                        "Observation for {} taken at {}",
                        report.location_name, report.observed_at
                    );
                    self.query = Some(query);
                    self.result = Some(report.clone());
                    return Ok(FetchOutcome::Report(report));
                }
                Err(err) => {
                    self.query = None;
                    self.result = None;
                    self.record_failure(&WeatherAppError::weather_fetch(&err));

                    query = match self.collect_input().await? {
                        Selection::Query(next) => next,
                        Selection::Exit => return Ok(FetchOutcome::Exit),
                        Selection::GaveUp => return Ok(FetchOutcome::GaveUp),
                    };
                }
            }
        }
    }

    pub fn print_result(&mut self, report: &WeatherReport) {
        for line in report.summary_lines() {
            self.console.say(&line);
        }
    }

    fn exhausted(&self) -> bool {
        self.config.max_attempts.is_some_and(|max| self.failures >= max.get())
    }

    fn record_failure(&mut self, err: &WeatherAppError) {
        match err {
            WeatherAppError::InvalidChoice { .. } => warn!("{err}"),
            _ => error!("{err}"),
        }
        self.console.say(&err.user_message());
        self.failures += 1;
    }

    /// One pass through the menu.
    async fn read_selection(&mut self) -> Result<Selection> {
        self.mode = None;
        self.query = None;

        for line in MENU {
            self.console.say(line);
        }
        let choice = self.console.read_line(CHOICE_PROMPT)?;

        let mode = Mode::from_choice(&choice)
            .ok_or_else(|| WeatherAppError::InvalidChoice { input: choice.trim().to_string() })?;
        self.mode = Some(mode);

        let query = match mode {
            Mode::Exit => return Ok(Selection::Exit),
            Mode::CurrentLocation => self.current_location().await?,
            Mode::PlaceName => self.place_name()?,
            Mode::Coordinates => self.coordinates()?,
        };

        Ok(Selection::Query(query))
    }

    async fn current_location(&mut self) -> Result<LocationQuery> {
        let location =
            self.geolocator.locate().await.map_err(|e| WeatherAppError::geolocation(&e))?;
        debug!("IP geolocation resolved to {}, {}", location.city, location.country);

        let country = to_iso2(&location.country)?;
        Ok(LocationQuery::place(location.city, country))
    }

    fn place_name(&mut self) -> Result<LocationQuery> {
        let country = self.console.read_line(COUNTRY_PROMPT)?;
        let city = self.console.read_line(CITY_PROMPT)?;
        let city = city.trim();

        let code = match Iso2Code::parse(&country) {
            Some(code) => code,
            None => to_iso2(&country)?,
        };

        self.console.say(&format!("Getting weather for {city}..."));
        Ok(LocationQuery::place(city, code))
    }

    fn coordinates(&mut self) -> Result<LocationQuery> {
        let lat = self.console.read_line(LATITUDE_PROMPT)?;
        let lon = self.console.read_line(LONGITUDE_PROMPT)?;

        let lat = parse_coordinate(&lat)?;
        let lon = parse_coordinate(&lon)?;

        self.console.say(&format!("Getting weather for coordinates {lat}, {lon}..."));
        Ok(LocationQuery::Coordinates { lat, lon })
    }
}

fn parse_coordinate(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| WeatherAppError::InvalidNumberFormat { input: raw.trim().to_string() })
}
