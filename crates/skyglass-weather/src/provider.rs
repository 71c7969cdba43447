//! WeatherAPI.com current-conditions client.

use reqwest::Client;
use serde::Deserialize;
use skyglass_core::WeatherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::types::{TemperatureUnit, WeatherError, WeatherReading};

const CURRENT_PATH: &str = "/v1/current.json";
const USER_AGENT: &str = concat!("Skyglass/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: Option<f64>,
    temp_f: Option<f64>,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

impl CurrentResponse {
    /// Only the field for `unit` is required; the other may be absent.
    fn into_reading(self, unit: TemperatureUnit) -> Result<WeatherReading, WeatherError> {
        let (temperature, field) = match unit {
            TemperatureUnit::Celsius => (self.current.temp_c, "temp_c"),
            TemperatureUnit::Fahrenheit => (self.current.temp_f, "temp_f"),
        };
        let temperature = temperature
            .ok_or_else(|| WeatherError::Parse(format!("missing field `current.{}`", field)))?;

        Ok(WeatherReading {
            temperature,
            description: self.current.condition.text,
            location: self.location.name,
            unit,
        })
    }
}

/// Map a `current.json` response body to a reading in `unit`.
pub fn parse_current(body: &str, unit: TemperatureUnit) -> Result<WeatherReading, WeatherError> {
    let response: CurrentResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;
    response.into_reading(unit)
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: Option<String>,
    unit: TemperatureUnit,
}

impl WeatherProvider {
    /// Provider using the configured API key, falling back to `WEATHER_API_KEY`.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        Self::with_api_key(config, config.api_key())
    }

    /// Provider using exactly `api_key`; the environment is not consulted.
    pub fn with_api_key(
        config: &WeatherConfig,
        api_key: Option<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            unit: config.temperature_unit,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up current conditions for `query` (surrounding whitespace ignored).
    ///
    /// Issues exactly one GET; blank queries and a missing API key fail
    /// before any request is sent. Failures are logged here so callers only
    /// deal with the user-facing side.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, query: &str) -> Result<WeatherReading, WeatherError> {
        let result = self.fetch_current(query.trim()).await;
        match &result {
            Ok(reading) => tracing::info!(
                "Fetched weather for {}: {}°{} {}",
                reading.location,
                reading.temperature,
                reading.unit,
                reading.description
            ),
            Err(e) => tracing::error!("Error fetching weather data: {}", e),
        }
        result
    }

    async fn fetch_current(&self, query: &str) -> Result<WeatherReading, WeatherError> {
        if query.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let url = format!("{}{}", self.base_url, CURRENT_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("key", api_key), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Weather API returned status {}", status);
            return Err(WeatherError::CityNotFound {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_current(&body, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "location": {"name": "London", "region": "City of London, Greater London", "country": "United Kingdom"},
        "current": {"temp_c": 12.5, "temp_f": 54.5, "is_day": 1, "condition": {"text": "Partly cloudy", "code": 1003}}
    }"#;

    #[test]
    fn test_parse_current_celsius() {
        let reading = parse_current(LONDON, TemperatureUnit::Celsius).unwrap();
        assert_eq!(reading.location, "London");
        assert_eq!(reading.temperature, 12.5);
        assert_eq!(reading.description, "Partly cloudy");
        assert_eq!(reading.unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_parse_current_fahrenheit_uses_api_field() {
        let reading = parse_current(LONDON, TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(reading.temperature, 54.5);
        assert_eq!(reading.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_parse_current_missing_fields() {
        let err = parse_current(r#"{"location": {"name": "X"}}"#, TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[test]
    fn test_parse_current_celsius_without_temp_f() {
        let body = r#"{"location":{"name":"Oslo"},"current":{"temp_c":3,"condition":{"text":"Snow"}}}"#;
        let reading = parse_current(body, TemperatureUnit::Celsius).unwrap();
        assert_eq!(reading.location, "Oslo");
        assert_eq!(reading.temperature, 3.0);
    }

    #[test]
    fn test_parse_current_fahrenheit_without_temp_c() {
        let body = r#"{"location":{"name":"Oslo"},"current":{"temp_f":37.4,"condition":{"text":"Snow"}}}"#;
        let reading = parse_current(body, TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(reading.temperature, 37.4);
        assert_eq!(reading.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_parse_current_missing_selected_unit() {
        let body = r#"{"location":{"name":"Oslo"},"current":{"temp_f":37.4,"condition":{"text":"Snow"}}}"#;
        let err = parse_current(body, TemperatureUnit::Celsius).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("temp_c")), "{err}");
    }

    #[test]
    fn test_parse_current_not_json() {
        let err = parse_current("<html>", TemperatureUnit::Celsius).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_blank_query_sends_nothing() {
        let config = WeatherConfig {
            api_key: Some("key".into()),
            // Unroutable: any request would fail with a network error instead
            base_url: "http://127.0.0.1:9".into(),
            ..WeatherConfig::default()
        };
        let provider = WeatherProvider::new(&config).unwrap();

        let err = provider.fetch("   ").await.unwrap_err();
        assert!(matches!(err, WeatherError::EmptyQuery));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = WeatherConfig {
            base_url: "https://api.weatherapi.com/".into(),
            ..WeatherConfig::default()
        };
        let provider = WeatherProvider::new(&config).unwrap();
        assert_eq!(provider.base_url, "https://api.weatherapi.com");
    }
}
