//! Scripted console and fake collaborators for session tests.

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use std::{
    collections::VecDeque,
    io,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    console::Console,
    geolocation::{Geolocator, IpLocation},
    model::{LocationQuery, WeatherReport},
    provider::WeatherProvider,
};

/// Feeds canned answers and records everything printed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self { inputs: inputs.iter().map(|s| s.to_string()).collect(), ..Self::default() }
    }

    pub fn printed(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn prompted(&self, prompt: &str) -> usize {
        self.prompts.iter().filter(|p| p.as_str() == prompt).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[derive(Debug, Default)]
pub struct FakeGeolocator {
    responses: Mutex<VecDeque<Option<IpLocation>>>,
    calls: AtomicUsize,
}

impl FakeGeolocator {
    /// `None` entries fail the lookup.
    pub fn new(responses: Vec<Option<IpLocation>>) -> Self {
        Self { responses: Mutex::new(responses.into()), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geolocator for FakeGeolocator {
    async fn locate(&self) -> anyhow::Result<IpLocation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .flatten()
            .ok_or_else(|| anyhow!("geolocation service unreachable"))
    }
}

#[derive(Debug, Default)]
pub struct FakeProvider {
    failures_before_success: AtomicUsize,
    pub queries: Mutex<Vec<LocationQuery>>,
}

impl FakeProvider {
    pub fn failing_first(n: usize) -> Self {
        Self { failures_before_success: AtomicUsize::new(n), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn query(&self, index: usize) -> LocationQuery {
        self.queries.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn current(&self, query: &LocationQuery) -> anyhow::Result<WeatherReport> {
        self.queries.lock().unwrap().push(query.clone());

        let remaining = self.failures_before_success.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_before_success.store(remaining - 1, Ordering::SeqCst);
            return Err(anyhow!("OpenWeather current request failed with status 404"));
        }

        let location_name = match query {
            LocationQuery::Place { city, .. } => city.clone(),
            LocationQuery::Coordinates { .. } => "Somewhere".to_string(),
        };

        Ok(WeatherReport {
            location_name,
            status: "Clear".to_string(),
            temp_c: 21.5,
            max_c: 24.0,
            min_c: 18.25,
            observed_at: Utc::now(),
        })
    }
}

pub fn ip_location(city: &str, country: &str) -> IpLocation {
    IpLocation { city: city.to_string(), country: country.to_string() }
}
