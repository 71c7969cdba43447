//! Weather lookup for Skyglass.
//!
//! Fetches current conditions for a city from WeatherAPI.com and derives
//! the display text and colour theme shown by the widget.

pub mod form;
pub mod present;
pub mod provider;
pub mod types;

pub use form::{FormView, WeatherForm};
pub use present::{
    location_message, location_message_now, temperature_message, weather_message, DayPeriod,
    GradientStop, WeatherTheme,
};
pub use provider::{parse_current, WeatherProvider};
pub use types::*;
