//! Colour palette for the widget and weather-card gradients.

use ratatui::style::Color;
use skyglass_weather::WeatherTheme;

// Base palette
pub const WHITE: Color = Color::Rgb(255, 255, 255);
pub const SLATE_900: Color = Color::Rgb(15, 23, 42);
pub const GRAY_300: Color = Color::Rgb(209, 213, 219);
pub const GRAY_500: Color = Color::Rgb(107, 114, 128);
pub const GRAY_800: Color = Color::Rgb(31, 41, 55);
pub const BLUE_600: Color = Color::Rgb(37, 99, 235);
pub const PURPLE_600: Color = Color::Rgb(147, 51, 234);
pub const RED_50: Color = Color::Rgb(254, 242, 242);
pub const RED_700: Color = Color::Rgb(185, 28, 28);
pub const ORANGE_600: Color = Color::Rgb(234, 88, 12);
pub const GREEN_600: Color = Color::Rgb(22, 163, 74);

// Semantic mappings
pub const TITLE: Color = BLUE_600;
pub const SUBTITLE: Color = GRAY_500;
pub const BORDER: Color = GRAY_300;
pub const BORDER_FOCUSED: Color = BLUE_600;
pub const TEXT_PRIMARY: Color = GRAY_800;
pub const TEXT_DIM: Color = GRAY_500;
pub const BUTTON: Color = PURPLE_600;
pub const BUTTON_BUSY: Color = GRAY_500;
pub const ERROR_BG: Color = RED_50;
pub const ERROR_FG: Color = RED_700;
pub const TILE_TEMPERATURE: Color = ORANGE_600;
pub const TILE_CONDITION: Color = BLUE_600;
pub const TILE_LOCATION: Color = GREEN_600;

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Colour at position `t` (0.0..=1.0) along the theme's three-stop gradient.
pub fn gradient_at(theme: WeatherTheme, t: f64) -> Color {
    let [start, mid, end] = theme.stops();
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t <= 0.5 {
        (start.rgb, mid.rgb, t * 2.0)
    } else {
        (mid.rgb, end.rgb, (t - 0.5) * 2.0)
    };
    Color::Rgb(
        lerp(from.0, to.0, local),
        lerp(from.1, to.1, local),
        lerp(from.2, to.2, local),
    )
}

/// Text colour that stays readable on the theme's middle stop.
pub fn card_foreground(theme: WeatherTheme) -> Color {
    let (r, g, b) = theme.stops()[1].rgb;
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luminance > 170.0 {
        SLATE_900
    } else {
        WHITE
    }
}
