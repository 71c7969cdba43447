use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::task;
use tracing::warn;

/// High level events understood by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Quit,
    /// Textual input from the user.
    Input(char),
    /// Submit the search form.
    Enter,
    Backspace,
    /// Ctrl+U: wipe the search box.
    ClearInput,
    /// Terminal was resized; just redraw.
    Resize,
}

/// Blocking crossterm reader wrapped for async callers.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `timeout` for the next event we care about.
    pub async fn try_next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        let available = match task::spawn_blocking(move || event::poll(timeout))
            .await
            .context("failed to join event poll task")?
        {
            Ok(available) => available,
            Err(err) => {
                warn!("event poll failed: {err}");
                return Ok(None);
            }
        };

        if !available {
            return Ok(None);
        }

        // Poll said an event is ready, so this read won't block
        let event = match task::spawn_blocking(event::read)
            .await
            .context("failed to join tui event reader task")?
        {
            Ok(event) => event,
            Err(err) => {
                warn!("tui event reader unavailable: {err}");
                return Ok(Some(Event::Quit));
            }
        };

        Ok(map_event(event))
    }
}

pub fn map_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind != KeyEventKind::Press {
                return None;
            }
            let ctrl = modifiers.contains(KeyModifiers::CONTROL);
            match code {
                KeyCode::Esc => Some(Event::Quit),
                KeyCode::Char('c') if ctrl => Some(Event::Quit),
                KeyCode::Char('u') if ctrl => Some(Event::ClearInput),
                KeyCode::Char(_) if ctrl => None,
                KeyCode::Char(c) => Some(Event::Input(c)),
                KeyCode::Enter => Some(Event::Enter),
                KeyCode::Backspace => Some(Event::Backspace),
                _ => None,
            }
        }
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn maps_typing_and_editing_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Event::Input('a'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Event::Input('A'))
        );
        assert_eq!(
            map_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Event::Enter)
        );
        assert_eq!(
            map_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Event::Backspace)
        );
    }

    #[test]
    fn maps_control_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(Event::ClearInput)
        );
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_event(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Event::Quit));
    }

    #[test]
    fn ignores_key_release() {
        let release = CrosstermEvent::Key(KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(map_event(release), None);
    }

    #[test]
    fn resize_triggers_redraw() {
        assert_eq!(map_event(CrosstermEvent::Resize(80, 24)), Some(Event::Resize));
    }
}
