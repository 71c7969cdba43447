use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skyglass_core::{AppError, Config, TemperatureUnit};
use skyglass_tui::report;
use skyglass_weather::WeatherProvider;

#[derive(Parser, Debug)]
#[command(name = "skyglass", version)]
#[command(about = "Current weather for any city, in your terminal")]
struct Cli {
    /// City to look up once and print. Omit to open the interactive widget
    city: Vec<String>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "city")]
    json: bool,

    /// WeatherAPI.com key (overrides config and WEATHER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Temperature unit: celsius or fahrenheit
    #[arg(long)]
    unit: Option<TemperatureUnit>,

    /// Weather API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(key) = &self.api_key {
            config.weather.api_key = Some(key.clone());
        }
        if let Some(unit) = self.unit {
            config.weather.temperature_unit = unit;
        }
        if let Some(base_url) = &self.base_url {
            config.weather.base_url = base_url.clone();
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.city.is_empty() {
        run_widget(&config).await
    } else {
        run_once(&config, &cli.city.join(" "), cli.json).await
    }
}

async fn run_widget(config: &Config) -> Result<()> {
    let _log_guard = if config.ui.log_file {
        Some(skyglass_core::init_file_logging(&config.config_dir)?)
    } else {
        skyglass_core::init_silent();
        None
    };
    config.ensure_valid()?;

    tracing::info!("Skyglass widget started");
    skyglass_tui::launch_tui(config).await
}

async fn run_once(config: &Config, query: &str, json: bool) -> Result<()> {
    skyglass_core::init()?;
    config.ensure_valid()?;

    let provider = WeatherProvider::new(&config.weather)?;
    let report = match report::lookup(&provider, query).await {
        Ok(report) => report,
        Err(e) => {
            let app_err = AppError::from(e);
            anyhow::bail!("{}", app_err.user_message());
        }
    };

    let output = if json {
        report.to_json().context("Failed to serialize weather report")?
    } else {
        report.to_text()
    };
    println!("{}", output);

    Ok(())
}
