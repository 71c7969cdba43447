//! Display text and theme derived from a reading.
//!
//! Everything here is pure; the only clock access is `location_message_now`.

use chrono::Timelike;

use crate::types::TemperatureUnit;

/// Render a temperature the way it is shown to the user: shortest decimal
/// form (`12`, `12.5`), with negative zero printed as `0`.
pub fn format_temperature(temperature: f64) -> String {
    let temperature = if temperature == 0.0 { 0.0 } else { temperature };
    format!("{}", temperature)
}

/// Clothing advice for a temperature. Only Celsius readings get advice;
/// other units just echo the value.
pub fn temperature_message(temperature: f64, unit: TemperatureUnit) -> String {
    let t = format_temperature(temperature);
    match unit {
        TemperatureUnit::Celsius => {
            if temperature < 0.0 {
                format!("It's freezing at {}°C! Bundle up!", t)
            } else if temperature < 10.0 {
                format!("It's quite cold at {}°C. Wear warm clothes.", t)
            } else if temperature < 20.0 {
                format!("The temperature is {}°C. Comfortable for a light jacket.", t)
            } else if temperature < 30.0 {
                format!("It's a pleasant {}°C. Enjoy the nice weather!", t)
            } else {
                format!("It's hot at {}°C. Stay hydrated!", t)
            }
        }
        other => format!("{}°{}", t, other.symbol()),
    }
}

/// Friendly sentence for a known condition; unknown conditions pass through.
pub fn weather_message(description: &str) -> String {
    let message = match description.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "Expect some clouds and sunshine.",
        "cloudy" => "It's cloudy today.",
        "overcast" => "The sky is overcast.",
        "rain" => "Don't forget your umbrella! It's raining.",
        "thunderstorm" => "Thunderstorms are expected today.",
        "snow" => "Bundle up! It's snowing.",
        "mist" => "It's misty outside.",
        "fog" => "Be careful, there's fog outside.",
        _ => return description.to_string(),
    };
    message.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    /// Night runs from 18:00 up to (not including) 06:00 local time.
    pub fn from_hour(hour: u32) -> Self {
        if hour >= 18 || hour < 6 {
            Self::Night
        } else {
            Self::Day
        }
    }

    pub fn now() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "During the Day",
            Self::Night => "at Night",
        }
    }
}

pub fn location_message(location: &str, period: DayPeriod) -> String {
    format!("{} {}", location, period.label())
}

/// `location_message` for the current local time.
pub fn location_message_now(location: &str) -> String {
    location_message(location, DayPeriod::now())
}

/// One colour stop of a theme gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    /// Palette name, e.g. `yellow-400`
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

const fn stop(name: &'static str, r: u8, g: u8, b: u8) -> GradientStop {
    GradientStop { name, rgb: (r, g, b) }
}

/// Colour theme of the weather card, chosen from the condition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherTheme {
    Sunny,
    Rainy,
    Snowy,
    Cloudy,
    Stormy,
    #[default]
    Default,
}

impl WeatherTheme {
    /// Keyword match on the lowercased description. The first matching
    /// rule wins, so "Patchy light rain with thunder" is `Rainy`.
    pub fn from_description(description: &str) -> Self {
        let desc = description.to_lowercase();
        if desc.contains("sunny") || desc.contains("clear") {
            Self::Sunny
        } else if desc.contains("rain") || desc.contains("drizzle") {
            Self::Rainy
        } else if desc.contains("snow") {
            Self::Snowy
        } else if desc.contains("cloud") {
            Self::Cloudy
        } else if desc.contains("thunder") {
            Self::Stormy
        } else {
            Self::Default
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Cloudy => "cloudy",
            Self::Stormy => "stormy",
            Self::Default => "default",
        }
    }

    /// Gradient stops, start to end.
    pub fn stops(self) -> [GradientStop; 3] {
        const GRAY_400: GradientStop = stop("gray-400", 156, 163, 175);
        const BLUE_500: GradientStop = stop("blue-500", 59, 130, 246);
        const BLUE_600: GradientStop = stop("blue-600", 37, 99, 235);

        match self {
            Self::Sunny => [
                stop("yellow-400", 250, 204, 21),
                stop("orange-400", 251, 146, 60),
                stop("red-400", 248, 113, 113),
            ],
            Self::Rainy => [GRAY_400, BLUE_500, BLUE_600],
            Self::Snowy => [
                stop("blue-100", 219, 234, 254),
                stop("blue-200", 191, 219, 254),
                stop("blue-300", 147, 197, 253),
            ],
            Self::Cloudy => [
                stop("gray-300", 209, 213, 219),
                GRAY_400,
                stop("gray-500", 107, 114, 128),
            ],
            Self::Stormy => [
                stop("gray-700", 55, 65, 81),
                stop("gray-800", 31, 41, 55),
                stop("gray-900", 17, 24, 39),
            ],
            Self::Default => [stop("blue-400", 96, 165, 250), BLUE_500, BLUE_600],
        }
    }
}
