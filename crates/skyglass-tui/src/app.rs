use std::sync::Arc;

use skyglass_weather::{WeatherForm, WeatherProvider};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::events::Event;
use crate::service::{self, WeatherServiceMessage};

/// Interactive widget state: the search form plus the channel its
/// lookups report back on.
pub struct App {
    form: WeatherForm,
    provider: Arc<WeatherProvider>,
    tx: UnboundedSender<WeatherServiceMessage>,
    rx: UnboundedReceiver<WeatherServiceMessage>,
    tick: usize,
    should_quit: bool,
}

impl App {
    pub fn new(provider: Arc<WeatherProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            form: WeatherForm::new(),
            provider,
            tx,
            rx,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn form(&self) -> &WeatherForm {
        &self.form
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.should_quit = true,
            Event::Input(c) => self.form.push_char(c),
            Event::Backspace => self.form.pop_char(),
            Event::ClearInput => self.form.clear_input(),
            Event::Enter => self.submit(),
            Event::Resize => {}
        }
    }

    fn submit(&mut self) {
        if let Some(query) = self.form.submit() {
            tracing::info!("Searching weather for {:?}", query);
            service::request_fetch(&self.tx, self.provider.clone(), query);
        }
    }

    /// Apply any finished lookups. Returns true if state changed.
    pub fn drain_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
            changed = true;
        }
        changed
    }

    fn apply(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::FetchDone(result) => self.form.on_fetch_done(result),
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglass_core::WeatherConfig;
    use skyglass_weather::FormView;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(base_url: String) -> App {
        let config = WeatherConfig {
            api_key: Some("test-key".into()),
            base_url,
            timeout_secs: 5,
            ..WeatherConfig::default()
        };
        App::new(Arc::new(WeatherProvider::new(&config).unwrap()))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(Event::Input(c));
        }
    }

    async fn wait_for_result(app: &mut App) {
        let message = app.rx.recv().await.unwrap();
        app.apply(message);
    }

    #[tokio::test]
    async fn typing_and_editing() {
        let mut app = app_for("http://127.0.0.1:9".into());
        type_text(&mut app, "Lisbonx");
        app.handle_event(Event::Backspace);
        assert_eq!(app.form().input(), "Lisbon");

        app.handle_event(Event::ClearInput);
        assert_eq!(app.form().input(), "");
    }

    #[tokio::test]
    async fn blank_search_shows_validation_error() {
        let mut app = app_for("http://127.0.0.1:9".into());
        type_text(&mut app, "  ");
        app.handle_event(Event::Enter);

        assert!(!app.form().is_loading());
        assert_eq!(
            app.form().view(),
            FormView::Error("Please enter a valid location.")
        );
    }

    #[tokio::test]
    async fn search_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .and(query_param("q", "Madrid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": { "name": "Madrid" },
                "current": { "temp_c": 24.0, "temp_f": 75.2, "condition": { "text": "Sunny" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut app = app_for(server.uri());
        type_text(&mut app, " Madrid ");
        app.handle_event(Event::Enter);
        assert!(app.form().is_loading());

        // A second Enter while loading must not start another request
        app.handle_event(Event::Enter);

        wait_for_result(&mut app).await;

        assert!(!app.form().is_loading());
        let weather = app.form().weather().unwrap();
        assert_eq!(weather.location, "Madrid");
        assert_eq!(weather.temperature, 24.0);
    }

    #[tokio::test]
    async fn failed_search_shows_city_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let mut app = app_for(server.uri());
        type_text(&mut app, "Atlantis");
        app.handle_event(Event::Enter);
        wait_for_result(&mut app).await;

        assert_eq!(
            app.form().view(),
            FormView::Error("City not found. Please try again.")
        );
    }

    #[tokio::test]
    async fn quit_and_tick() {
        let mut app = app_for("http://127.0.0.1:9".into());
        assert!(!app.drain_messages());
        app.on_tick();
        assert_eq!(app.tick(), 1);
        app.handle_event(Event::Quit);
        assert!(app.should_quit());
    }
}
