// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::instrument;

pub const DEFAULT_ONECALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub onecall: OneCallSettings,
  pub location: Location,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneCallSettings {
  #[serde(default = "default_url")]
  pub url: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  #[serde(default)]
  pub units: Units,
  pub lang: Option<String>,
  #[serde(default)]
  pub exclude: Vec<Part>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
  pub lat: f64,
  pub lon: f64,
}

/// Unit system requested from the API. `Standard` is what the API
/// assumes when no `units` parameter is sent (Kelvin, m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
  #[default]
  Standard,
  Metric,
  Imperial,
}

/// A block of the one call response that can be excluded from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
  Current,
  Minutely,
  Hourly,
  Daily,
  Alerts,
}

fn default_url() -> String {
  DEFAULT_ONECALL_URL.to_string()
}

fn default_timeout_secs() -> u64 {
  DEFAULT_TIMEOUT_SECS
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    Self::from_toml(&content)
  }

  pub fn from_toml(content: &str) -> anyhow::Result<Self> {
    let config: Self = toml::from_str(content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }
}

impl Default for OneCallSettings {
  fn default() -> Self {
    Self {
      url: default_url(),
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      units: Units::default(),
      lang: None,
      exclude: Vec::new(),
    }
  }
}

impl std::fmt::Display for Units {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let units = match self {
      Units::Standard => "standard",
      Units::Metric => "metric",
      Units::Imperial => "imperial",
    };
    write!(f, "{}", units)
  }
}

impl std::fmt::Display for Part {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let part = match self {
      Part::Current => "current",
      Part::Minutely => "minutely",
      Part::Hourly => "hourly",
      Part::Daily => "daily",
      Part::Alerts => "alerts",
    };
    write!(f, "{}", part)
  }
}
