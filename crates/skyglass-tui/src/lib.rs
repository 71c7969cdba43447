//! Terminal front end for Skyglass.
//!
//! `launch_tui` runs the interactive widget; `report` covers the
//! one-shot command line lookup.

pub mod app;
pub mod events;
pub mod report;
pub mod service;
pub mod theme;
pub mod ui;

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::{Arc, Once};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use skyglass_core::Config;
use skyglass_weather::WeatherProvider;

use crate::app::App;
use crate::events::EventHandler;

type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Restore the terminal before the default panic report is printed.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = reset_terminal();
            original(info);
        }));
    });
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Undo `setup_terminal` without needing the `Terminal` handle.
fn reset_terminal() -> io::Result<()> {
    let raw = terminal::disable_raw_mode();
    leave_screen(&mut io::stdout())?;
    raw
}

fn setup_terminal() -> Result<Tui> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    enter_screen().inspect_err(|_| {
        if let Err(e) = reset_terminal() {
            tracing::error!("Failed to reset terminal after setup error: {}", e);
        }
    })
}

fn enter_screen() -> Result<Tui> {
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Show)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    reset_terminal()?;
    terminal.show_cursor()?;
    Ok(())
}

/// Open the interactive widget and run it until the user quits.
pub async fn launch_tui(config: &Config) -> Result<()> {
    let provider = WeatherProvider::new(&config.weather)?;
    if !provider.has_api_key() {
        tracing::warn!("No weather API key configured; lookups will fail");
    }
    let app = App::new(Arc::new(provider));
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app, tick_rate).await;
    if let Err(e) = restore_terminal(&mut terminal) {
        tracing::error!("Failed to restore terminal: {}", e);
    }
    tracing::info!("Widget closed");
    result
}

async fn run_app(terminal: &mut Tui, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Some(event) = events.try_next(tick_rate).await? {
            app.handle_event(event);
        }
        app.drain_messages();
        app.on_tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_screen_exits_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?25h"), "{written:?}");
    }
}
