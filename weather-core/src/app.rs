use tracing::{debug, error};

use crate::{
    config::Config,
    console::Console,
    error::Result,
    geolocation::Geolocator,
    provider::WeatherProvider,
    session::{FetchOutcome, InputSession, Selection},
};

pub const WELCOME: [&str; 3] = [
    "Welcome to the Weather App!",
    "This app provides weather information for your current location or a specified city.",
    "You can also get weather information by coordinates.",
];

pub const EXIT_MESSAGE: &str = "Exiting the program.";
pub const FATAL_MESSAGE: &str =
    "An error occurred while fetching the weather. Please try again later.";

/// Interactive loop: a fresh session per round until the user exits.
///
/// Errors that escape a session are logged and end the loop; they are not
/// reported to the caller.
pub async fn run(
    config: &Config,
    geolocator: &dyn Geolocator,
    provider: &dyn WeatherProvider,
    console: &mut dyn Console,
) {
    for line in WELCOME {
        console.say(line);
    }

    if let Err(err) = run_sessions(config, geolocator, provider, console).await {
        error!("An error occurred: {err}");
        console.say(FATAL_MESSAGE);
    }
}

async fn run_sessions(
    config: &Config,
    geolocator: &dyn Geolocator,
    provider: &dyn WeatherProvider,
    console: &mut dyn Console,
) -> Result<()> {
    loop {
        let mut session = InputSession::new(config, geolocator, provider, console);

        let query = match session.collect_input().await? {
            Selection::Query(query) => query,
            Selection::GaveUp => continue,
            Selection::Exit => break,
        };

        match session.fetch_weather(query).await? {
            FetchOutcome::Report(report) => session.print_result(&report),
            FetchOutcome::GaveUp => continue,
            FetchOutcome::Exit => break,
        }
    }

    debug!("User requested exit");
    console.say(EXIT_MESSAGE);
    Ok(())
}
