use serde::{Deserialize, Serialize};
use skyglass_core::AppError;

pub use skyglass_core::TemperatureUnit;

/// Current conditions for one looked-up location, as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub description: String,
    pub location: String,
    pub unit: TemperatureUnit,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("No API key configured")]
    MissingApiKey,
    #[error("Empty location query")]
    EmptyQuery,
    #[error("City not found (HTTP {status})")]
    CityNotFound { status: u16 },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// The application-level error this lookup failure is reported as.
    ///
    /// Every failed lookup surfaces as "location not found", keeping the
    /// transport detail in the message for the logs.
    pub fn to_core(&self) -> skyglass_core::WeatherError {
        match self {
            Self::MissingApiKey => skyglass_core::WeatherError::MissingApiKey,
            Self::EmptyQuery => skyglass_core::WeatherError::EmptyQuery,
            other => skyglass_core::WeatherError::LocationNotFound(other.to_string()),
        }
    }

    /// Line shown to the user in the error panel.
    pub fn user_message(&self) -> &'static str {
        self.to_core().user_message()
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        AppError::Weather(e.to_core())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failures_read_as_city_not_found() {
        let errors = [
            WeatherError::CityNotFound { status: 400 },
            WeatherError::Parse("missing field `current`".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), "City not found. Please try again.");
        }
    }

    #[test]
    fn test_empty_query_message() {
        assert_eq!(
            WeatherError::EmptyQuery.user_message(),
            "Please enter a valid location."
        );
    }

    #[test]
    fn test_missing_key_maps_to_core() {
        let app: AppError = WeatherError::MissingApiKey.into();
        assert!(matches!(
            app,
            AppError::Weather(skyglass_core::WeatherError::MissingApiKey)
        ));
    }

    #[test]
    fn test_core_error_keeps_status() {
        let core = WeatherError::CityNotFound { status: 404 }.to_core();
        assert!(core.to_string().contains("404"));
    }
}
