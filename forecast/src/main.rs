// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use config::Config;
use onecall::{Alert, OneCallConfig, Options, Provider, Response, Timestamped};
use std::{env, path::PathBuf};
use tracing::{info, instrument, warn};

const DATE_FORMAT: &str = "%a %d %b";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone)]
pub struct ForecastConfig {
  api_key: String,
  config_path: PathBuf,
}

pub struct ForecastRunner {
  provider: Provider,
  config: Config,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let config = ForecastConfig {
    api_key: env::var("OPENWEATHER_API_KEY").context("Missing OPENWEATHER_API_KEY")?,
    config_path: env::args()
      .nth(1)
      .unwrap_or_else(|| "onecall.toml".to_string())
      .into(),
  };

  ForecastRunner::new(config)?.run().await
}

impl ForecastRunner {
  #[instrument(skip(config))]
  pub fn new(config: ForecastConfig) -> Result<Self> {
    let settings = Config::from_file(&config.config_path)
      .with_context(|| format!("Failed to load {}", config.config_path.display()))?;
    let provider = Provider::new(OneCallConfig::from_settings(
      config.api_key,
      &settings.onecall,
    )?)?;

    Ok(Self {
      provider,
      config: settings,
    })
  }

  #[instrument(skip(self))]
  pub async fn run(&self) -> Result<()> {
    let location = self.config.location;
    let options = Options::from(&self.config.onecall);

    match self
      .provider
      .get_weather(location.lat, location.lon, &options)
      .await
    {
      Some(report) => print_report(&report),
      None => warn!(
        "No weather available for ({}, {})",
        location.lat, location.lon
      ),
    }

    Ok(())
  }
}

fn print_report(report: &Response) {
  info!(
    "{} ({}, {}): {}",
    report.timezone,
    report.lat,
    report.lon,
    report.weather_info()
  );

  if let Some(current) = &report.current {
    info!(
      "Sunrise {} / sunset {}",
      report.local_time(current.sunrise).format(TIME_FORMAT),
      report.local_time(current.sunset).format(TIME_FORMAT)
    );
  }

  for day in &report.daily {
    info!(
      "{}  {:<16} {:.1}° / {:.1}°  pop {}",
      report.local_time(day.timestamp()).format(DATE_FORMAT),
      day.weather_icon(),
      day.temp.min,
      day.temp.max,
      day
        .pop
        .map_or("n/a".to_string(), |pop| format!("{:.0}%", pop * 100.0))
    );
  }

  let now = Utc::now();
  for alert in &report.alerts {
    warn!(
      "[{}] {} ({}): {} until {}",
      alert_status(alert, now),
      alert.event,
      alert.sender_name,
      report.local_time(alert.start).format(TIME_FORMAT),
      report.local_time(alert.end).format(TIME_FORMAT)
    );
  }
}

fn alert_status(alert: &Alert, now: DateTime<Utc>) -> &'static str {
  if alert.is_active_at(now) {
    "active"
  } else if now < alert.start_date() {
    "upcoming"
  } else {
    "expired"
  }
}
