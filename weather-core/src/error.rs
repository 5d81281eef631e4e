use thiserror::Error;

use crate::country::ConversionError;

/// Failures the weather app knows how to talk about.
///
/// Everything except [`WeatherAppError::ConfigMissing`], [`WeatherAppError::InvalidConfig`]
/// and [`WeatherAppError::Io`] is recoverable: the session logs it, tells the user
/// and asks for a new location.
#[derive(Debug, Error)]
pub enum WeatherAppError {
    #[error(
        "API_KEY not found. Set it in the environment or a .env file, \
         or run `weather-app configure`."
    )]
    ConfigMissing,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Could not determine current location: {message}")]
    GeolocationFailed { message: String },

    #[error("'{input}' is not a menu option")]
    InvalidChoice { input: String },

    #[error("Could not convert '{input}' to an ISO2 country code")]
    CountryCodeConversionFailed { input: String },

    #[error("'{input}' is not a valid number")]
    InvalidNumberFormat { input: String },

    #[error("Error fetching weather data: {message}")]
    WeatherFetchFailed { message: String },

    #[error("Console I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherAppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    /// Keeps the whole `anyhow` chain so the log line says why the lookup failed.
    pub fn geolocation(err: &anyhow::Error) -> Self {
        Self::GeolocationFailed { message: format!("{err:#}") }
    }

    pub fn weather_fetch(err: &anyhow::Error) -> Self {
        Self::WeatherFetchFailed { message: format!("{err:#}") }
    }

    /// `false` for errors that must end the program instead of re-prompting.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ConfigMissing | Self::InvalidConfig { .. } | Self::Io { .. })
    }

    /// The line shown on the console; details go to the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigMissing => self.to_string(),
            Self::InvalidConfig { message } => format!("Configuration error: {message}"),
            Self::GeolocationFailed { .. } => {
                "Could not determine your current location. Please try again.".to_string()
            }
            Self::InvalidChoice { .. } => "Invalid choice. Please try again.".to_string(),
            Self::CountryCodeConversionFailed { .. } => {
                "Invalid country name. Please try again.".to_string()
            }
            Self::InvalidNumberFormat { .. } => {
                "Invalid input. Please enter numeric values for latitude and longitude."
                    .to_string()
            }
            Self::WeatherFetchFailed { .. } => {
                "An error occurred while fetching the weather data. Please try again.".to_string()
            }
            Self::Io { .. } => {
                "An error occurred while fetching the weather. Please try again later.".to_string()
            }
        }
    }
}

impl From<ConversionError> for WeatherAppError {
    fn from(err: ConversionError) -> Self {
        Self::CountryCodeConversionFailed { input: err.input }
    }
}

pub type Result<T, E = WeatherAppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_details() {
        let err = WeatherAppError::weather_fetch(&anyhow::anyhow!("HTTP 404: city not found"));
        assert!(err.to_string().contains("city not found"));
        assert!(!err.user_message().contains("404"));
        assert!(err.user_message().contains("fetching the weather data"));
    }

    #[test]
    fn anyhow_context_is_kept_in_display() {
        let source = anyhow::anyhow!("connection refused").context("Failed to reach ipinfo.io");
        let err = WeatherAppError::geolocation(&source);

        let msg = err.to_string();
        assert!(msg.contains("Failed to reach ipinfo.io"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: WeatherAppError = io.into();
        assert!(matches!(err, WeatherAppError::Io { .. }));
    }

    #[test]
    fn only_console_and_config_errors_are_fatal() {
        assert!(!WeatherAppError::ConfigMissing.is_recoverable());
        assert!(!WeatherAppError::invalid_config("bad").is_recoverable());
        assert!(!WeatherAppError::from(std::io::Error::other("closed")).is_recoverable());

        assert!(WeatherAppError::InvalidChoice { input: "9".into() }.is_recoverable());
        assert!(WeatherAppError::InvalidNumberFormat { input: "x".into() }.is_recoverable());
        assert!(WeatherAppError::from(ConversionError { input: "Narnia".into() }).is_recoverable());
    }

    #[test]
    fn config_missing_mentions_both_sources() {
        let msg = WeatherAppError::ConfigMissing.user_message();
        assert!(msg.contains(".env"));
        assert!(msg.contains("weather-app configure"));
    }
}
