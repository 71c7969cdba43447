//! Search form state machine.
//!
//! idle -> loading -> success | error. Only one lookup may be in flight;
//! `submit` refuses to start another until `on_fetch_done` is called.

use crate::types::{WeatherError, WeatherReading};

/// What the body of the widget should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormView<'a> {
    /// Nothing searched yet (or nothing to show).
    Empty,
    /// A lookup is in flight. The previous reading, if any, stays visible.
    Loading(Option<&'a WeatherReading>),
    Error(&'a str),
    Weather(&'a WeatherReading),
}

#[derive(Debug, Clone, Default)]
pub struct WeatherForm {
    input: String,
    weather: Option<WeatherReading>,
    error: Option<String>,
    loading: bool,
}

impl WeatherForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn weather(&self) -> Option<&WeatherReading> {
        self.weather.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True if a new search can be started.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Start a search for the current input.
    ///
    /// Returns the trimmed query to fetch, or `None` when nothing should be
    /// sent: a lookup is already running, or the input is blank (which
    /// sets the validation error and drops the shown reading).
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            tracing::debug!("Search ignored: lookup already in flight");
            return None;
        }

        let query = self.input.trim();
        if query.is_empty() {
            self.error = Some(WeatherError::EmptyQuery.user_message().to_string());
            self.weather = None;
            return None;
        }

        let query = query.to_string();
        self.loading = true;
        self.error = None;
        Some(query)
    }

    /// Apply the outcome of the lookup started by `submit`.
    pub fn on_fetch_done(&mut self, result: Result<WeatherReading, WeatherError>) {
        if !self.loading {
            tracing::warn!("Fetch result arrived with no lookup in flight; ignoring");
            return;
        }
        self.loading = false;

        match result {
            Ok(reading) => {
                self.weather = Some(reading);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                self.weather = None;
            }
        }
    }

    pub fn view(&self) -> FormView<'_> {
        if self.loading {
            FormView::Loading(self.weather.as_ref())
        } else if let Some(error) = &self.error {
            FormView::Error(error)
        } else if let Some(weather) = &self.weather {
            FormView::Weather(weather)
        } else {
            FormView::Empty
        }
    }
}
