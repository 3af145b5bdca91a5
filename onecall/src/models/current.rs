// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  condition::{summary, Condition, IconCategory},
  precipitation::Precipitation,
  time::{epoch_to_utc, Timestamped},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conditions at report time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
  pub dt: i64,
  pub sunrise: i64,
  pub sunset: i64,
  pub temp: f64,
  pub feels_like: f64,
  pub pressure: i64,
  pub humidity: i64,
  pub dew_point: f64,
  pub uvi: f64,
  pub clouds: i64,
  pub visibility: i64,
  pub wind_speed: f64,
  pub wind_deg: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wind_gust: Option<f64>,
  pub weather: Vec<Condition>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rain: Option<Precipitation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub snow: Option<Precipitation>,
}

impl Current {
  pub fn empty() -> Self {
    Self {
      dt: 0,
      sunrise: 0,
      sunset: 0,
      temp: 0.0,
      feels_like: 0.0,
      pressure: 0,
      humidity: 0,
      dew_point: 0.0,
      uvi: 0.0,
      clouds: 0,
      visibility: 0,
      wind_speed: 0.0,
      wind_deg: 0,
      wind_gust: Some(0.0),
      weather: Vec::new(),
      rain: Some(Precipitation::empty()),
      snow: Some(Precipitation::empty()),
    }
  }

  pub fn sunrise_date(&self) -> DateTime<Utc> {
    epoch_to_utc(self.sunrise)
  }

  pub fn sunset_date(&self) -> DateTime<Utc> {
    epoch_to_utc(self.sunset)
  }

  pub fn weather_icon(&self) -> IconCategory {
    IconCategory::from_conditions(&self.weather)
  }

  pub fn weather_info(&self) -> String {
    summary(&self.weather, self.temp)
  }
}

impl Default for Current {
  fn default() -> Self {
    Self::empty()
  }
}

impl Timestamped for Current {
  fn timestamp(&self) -> i64 {
    self.dt
  }
}
