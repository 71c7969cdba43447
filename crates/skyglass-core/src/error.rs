//! Centralized error types for Skyglass.
//!
//! Every error can be turned into a short, non-technical line via
//! `user_message()` for display in the widget; the `Display` output keeps
//! the full context for logs.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Weather service errors, as seen by the widget.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Blank search box.
    #[error("Empty location query")]
    EmptyQuery,

    /// The lookup failed: unknown city, bad response or unreachable service.
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Weather API key is not configured")]
    MissingApiKey,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::EmptyQuery => "Please enter a valid location.",
            WeatherError::LocationNotFound(_) => "City not found. Please try again.",
            WeatherError::MissingApiKey => {
                "Weather API key is missing. Set WEATHER_API_KEY or add it to the config."
            }
        }
    }
}
