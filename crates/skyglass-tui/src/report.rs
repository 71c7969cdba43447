//! One-shot lookup output: the weather card as plain text or JSON.

use serde::Serialize;
use skyglass_weather::{
    location_message, present::format_temperature, temperature_message, weather_message,
    DayPeriod, WeatherError, WeatherProvider, WeatherReading, WeatherTheme,
};

/// A reading plus everything derived from it for display.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: f64,
    pub unit: String,
    pub description: String,
    pub temperature_message: String,
    pub weather_message: String,
    pub location_message: String,
    pub theme: String,
}

impl WeatherReport {
    pub fn from_reading(reading: &WeatherReading, period: DayPeriod) -> Self {
        Self {
            location: reading.location.clone(),
            temperature: reading.temperature,
            unit: reading.unit.symbol().to_string(),
            description: reading.description.clone(),
            temperature_message: temperature_message(reading.temperature, reading.unit),
            weather_message: weather_message(&reading.description),
            location_message: location_message(&reading.location, period),
            theme: WeatherTheme::from_description(&reading.description)
                .key()
                .to_string(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "{location}\n{temp}°{unit}  {description}\n\n  {tmsg}\n  {wmsg}\n  {lmsg}\n\ntheme: {theme}",
            location = self.location,
            temp = format_temperature(self.temperature),
            unit = self.unit,
            description = self.description,
            tmsg = self.temperature_message,
            wmsg = self.weather_message,
            lmsg = self.location_message,
            theme = self.theme,
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Look up `query` once and build its report.
pub async fn lookup(provider: &WeatherProvider, query: &str) -> Result<WeatherReport, WeatherError> {
    let reading = provider.fetch(query).await?;
    Ok(WeatherReport::from_reading(&reading, DayPeriod::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglass_weather::TemperatureUnit;

    fn reading() -> WeatherReading {
        WeatherReading {
            temperature: -2.0,
            description: "Snow".to_string(),
            location: "Helsinki".to_string(),
            unit: TemperatureUnit::Celsius,
        }
    }

    #[test]
    fn report_derives_messages() {
        let report = WeatherReport::from_reading(&reading(), DayPeriod::Night);
        assert_eq!(report.temperature_message, "It's freezing at -2°C! Bundle up!");
        assert_eq!(report.weather_message, "Bundle up! It's snowing.");
        assert_eq!(report.location_message, "Helsinki at Night");
        assert_eq!(report.theme, "snowy");
        assert_eq!(report.unit, "C");
    }

    #[test]
    fn text_output_contains_card() {
        let text = WeatherReport::from_reading(&reading(), DayPeriod::Day).to_text();
        assert!(text.starts_with("Helsinki\n-2°C  Snow"));
        assert!(text.contains("Helsinki During the Day"));
        assert!(text.ends_with("theme: snowy"));
    }

    #[test]
    fn json_output_has_all_fields() {
        let json = WeatherReport::from_reading(&reading(), DayPeriod::Day)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["location"], "Helsinki");
        assert_eq!(value["temperature"], -2.0);
        assert_eq!(value["theme"], "snowy");
        assert_eq!(value["weather_message"], "Bundle up! It's snowing.");
    }
}
