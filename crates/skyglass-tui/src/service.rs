//! Weather backend: async weather fetching.
//! Network work runs on the tokio runtime; results come back over mpsc.

use std::sync::Arc;

use skyglass_weather::{WeatherError, WeatherProvider, WeatherReading};
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from async operations back to the UI loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching weather data
    FetchDone(Result<WeatherReading, WeatherError>),
}

/// Fetch weather for `query` in the background.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &UnboundedSender<WeatherServiceMessage>,
    provider: Arc<WeatherProvider>,
    query: String,
) {
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = provider.fetch(&query).await;
        if tx.send(WeatherServiceMessage::FetchDone(result)).is_err() {
            tracing::debug!("UI closed before weather fetch for {:?} finished", query);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglass_core::WeatherConfig;

    #[tokio::test]
    async fn fetch_result_is_delivered() {
        let config = WeatherConfig {
            api_key: Some("key".into()),
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..WeatherConfig::default()
        };
        let provider = Arc::new(WeatherProvider::new(&config).unwrap());
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        request_fetch(&tx, provider, "   ".into());

        let WeatherServiceMessage::FetchDone(result) = rx.recv().await.unwrap();
        assert!(matches!(result, Err(WeatherError::EmptyQuery)));
    }
}
