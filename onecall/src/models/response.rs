// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  alert::Alert,
  current::Current,
  forecast::{Daily, Hourly, Minutely},
  null_as_empty,
  time::epoch_to_local,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A full one call report for a single coordinate.
///
/// `lat`/`lon` echo the request. Forecast and alert blocks are always
/// present after decoding, empty when the API left them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
  pub lat: f64,
  pub lon: f64,
  pub timezone: String,
  pub timezone_offset: i32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current: Option<Current>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub minutely: Vec<Minutely>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub hourly: Vec<Hourly>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub daily: Vec<Daily>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub alerts: Vec<Alert>,
}

impl Response {
  /// Placeholder report used before the first fetch completes.
  pub fn empty() -> Self {
    Self {
      lat: 0.0,
      lon: 0.0,
      timezone: String::new(),
      timezone_offset: 0,
      current: Some(Current::empty()),
      minutely: Vec::new(),
      hourly: Vec::new(),
      daily: Vec::new(),
      alerts: Vec::new(),
    }
  }

  pub fn weather_info(&self) -> String {
    self
      .current
      .as_ref()
      .map(Current::weather_info)
      .unwrap_or_default()
  }

  /// Wall-clock time at the reported location.
  pub fn local_time(&self, epoch_secs: i64) -> DateTime<FixedOffset> {
    epoch_to_local(epoch_secs, self.timezone_offset)
  }

  pub fn daily_set(&self) -> HashSet<&Daily> {
    self.daily.iter().collect()
  }
}

impl Default for Response {
  fn default() -> Self {
    Self::empty()
  }
}
