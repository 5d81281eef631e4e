use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use weather_app_core::{
    Config, IpInfoGeolocator, OpenWeatherProvider, StdConsole, StoredConfig, app,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-app", version, about = "Current weather in your terminal")]
pub struct Cli {
    /// Failed attempts allowed before returning to the menu (0 = unlimited).
    /// Overrides WEATHER_MAX_ATTEMPTS.
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the user config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => interactive(self.max_attempts).await,
        }
    }
}

async fn interactive(max_attempts: Option<u32>) -> anyhow::Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(n) = max_attempts {
        config = config.with_max_attempts(n);
    }
    tracing::debug!("Retry bound: {:?}", config.max_attempts);

    let geolocator = IpInfoGeolocator::new();
    let provider = OpenWeatherProvider::from_config(&config);
    let mut console = StdConsole::new();

    app::run(&config, &geolocator, &provider, &mut console).await;
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    let mut stored = StoredConfig::load()?;
    stored.api_key = Some(api_key.to_string());
    let path = stored.save()?;

    println!("API key saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_interactive() {
        let cli = Cli::try_parse_from(["weather-app"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_configure_and_max_attempts() {
        let cli = Cli::try_parse_from(["weather-app", "configure", "--max-attempts", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Configure)));
        assert_eq!(cli.max_attempts, Some(3));
    }

    #[test]
    fn rejects_negative_max_attempts() {
        assert!(Cli::try_parse_from(["weather-app", "--max-attempts", "-1"]).is_err());
    }
}
