use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use skyglass_weather::{
    location_message_now, present::format_temperature, temperature_message, weather_message,
    FormView, WeatherReading, WeatherTheme,
};

use crate::app::App;
use crate::theme;

const TITLE: &str = "Weather Widget";
const SUBTITLE: &str = "Discover current weather conditions in any city worldwide";
const PLACEHOLDER: &str = "Enter a city name...";
const EMPTY_HINT: &str = "Enter a city name to get started";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Label of the submit button.
pub fn button_label(loading: bool, tick: usize) -> String {
    if loading {
        format!("{} Searching...", SPINNER[tick % SPINNER.len()])
    } else {
        "Search".to_string()
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let form = app.form();
    let view = form.view();
    let error_height = if matches!(view, FormView::Error(_)) { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_search(frame, chunks[1], app);

    match view {
        FormView::Error(message) => {
            draw_error(frame, chunks[2], message);
        }
        FormView::Weather(reading) | FormView::Loading(Some(reading)) => {
            draw_weather(frame, chunks[3], reading);
        }
        FormView::Empty => draw_empty(frame, chunks[3]),
        FormView::Loading(None) => {}
    }

    draw_footer(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme::TITLE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(theme::SUBTITLE))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let input_block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED));

    let input = if form.input().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme::TEXT_DIM)))
    } else {
        Line::from(Span::styled(
            form.input().to_string(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ))
    };
    frame.render_widget(Paragraph::new(input).block(input_block), chunks[0]);

    // Cursor sits after the typed text, clamped to the box
    let inner_width = chunks[0].width.saturating_sub(2);
    let typed = u16::try_from(form.input().chars().count()).unwrap_or(u16::MAX);
    frame.set_cursor(
        chunks[0].x + 1 + typed.min(inner_width.saturating_sub(1)),
        chunks[0].y + 1,
    );

    let loading = form.is_loading();
    let button_color = if loading { theme::BUTTON_BUSY } else { theme::BUTTON };
    let button = Paragraph::new(Line::from(Span::styled(
        button_label(loading, app.tick()),
        Style::default()
            .fg(theme::WHITE)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(button_color))
            .style(Style::default().bg(button_color)),
    );
    frame.render_widget(button, chunks[1]);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(theme::ERROR_FG)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ERROR_FG))
            .style(Style::default().bg(theme::ERROR_BG)),
    );
    frame.render_widget(error, area);
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled("☁", Style::default().fg(theme::BORDER))),
        Line::from(""),
        Line::from(Span::styled(EMPTY_HINT, Style::default().fg(theme::TEXT_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);
}

fn draw_weather(frame: &mut Frame, area: Rect, reading: &WeatherReading) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(area);

    draw_card(frame, chunks[0], reading);
    draw_tiles(frame, chunks[2], reading);
}

/// Headline card on a vertical gradient picked from the condition text.
fn draw_card(frame: &mut Frame, area: Rect, reading: &WeatherReading) {
    let theme_kind = WeatherTheme::from_description(&reading.description);
    let fg = theme::card_foreground(theme_kind);

    let rows: [(String, Modifier); 7] = [
        (String::new(), Modifier::empty()),
        (reading.location.clone(), Modifier::BOLD),
        (String::new(), Modifier::empty()),
        (
            format!("{}°{}", format_temperature(reading.temperature), reading.unit),
            Modifier::BOLD,
        ),
        (String::new(), Modifier::empty()),
        (reading.description.clone(), Modifier::empty()),
        (String::new(), Modifier::empty()),
    ];

    let height = area.height.min(rows.len() as u16);
    let span = f64::from(height.saturating_sub(1).max(1));
    for (i, (text, modifier)) in rows.into_iter().take(usize::from(height)).enumerate() {
        let row = i as u16;
        let bg = theme::gradient_at(theme_kind, f64::from(row) / span);
        let line_area = Rect {
            x: area.x,
            y: area.y + row,
            width: area.width,
            height: 1,
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(fg).add_modifier(modifier),
        )))
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, line_area);
    }
}

fn draw_tiles(frame: &mut Frame, area: Rect, reading: &WeatherReading) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let tiles = [
        (
            "🌡 Temperature",
            theme::TILE_TEMPERATURE,
            temperature_message(reading.temperature, reading.unit),
        ),
        (
            "☁ Conditions",
            theme::TILE_CONDITION,
            weather_message(&reading.description),
        ),
        (
            "📍 Location",
            theme::TILE_LOCATION,
            location_message_now(&reading.location),
        ),
    ];

    for ((title, color, message), chunk) in tiles.into_iter().zip(chunks.iter()) {
        let tile = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(color)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(tile, *chunk);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme::TITLE)),
        Span::styled(" search  ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled("Ctrl+U", Style::default().fg(theme::TITLE)),
        Span::styled(" clear  ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled("Esc", Style::default().fg(theme::TITLE)),
        Span::styled(" quit", Style::default().fg(theme::TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
}
