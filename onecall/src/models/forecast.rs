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
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minutely {
  pub dt: i64,
  pub precipitation: f64,
}

impl Minutely {
  pub fn empty() -> Self {
    Self {
      dt: 0,
      precipitation: 0.0,
    }
  }
}

impl Default for Minutely {
  fn default() -> Self {
    Self::empty()
  }
}

impl Timestamped for Minutely {
  fn timestamp(&self) -> i64 {
    self.dt
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hourly {
  pub dt: i64,
  pub temp: f64,
  pub feels_like: f64,
  pub pressure: i64,
  pub humidity: i64,
  pub dew_point: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uvi: Option<f64>,
  pub clouds: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visibility: Option<i64>,
  pub wind_speed: f64,
  pub wind_deg: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wind_gust: Option<f64>,
  pub weather: Vec<Condition>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pop: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rain: Option<Precipitation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub snow: Option<Precipitation>,
}

impl Hourly {
  pub fn empty() -> Self {
    Self {
      dt: 0,
      temp: 0.0,
      feels_like: 0.0,
      pressure: 0,
      humidity: 0,
      dew_point: 0.0,
      uvi: Some(0.0),
      clouds: 0,
      visibility: Some(0),
      wind_speed: 0.0,
      wind_deg: 0,
      wind_gust: Some(0.0),
      weather: Vec::new(),
      pop: Some(0.0),
      rain: Some(Precipitation::empty()),
      snow: Some(Precipitation::empty()),
    }
  }

  pub fn weather_icon(&self) -> IconCategory {
    IconCategory::from_conditions(&self.weather)
  }

  pub fn weather_info(&self) -> String {
    summary(&self.weather, self.temp)
  }
}

impl Default for Hourly {
  fn default() -> Self {
    Self::empty()
  }
}

impl Timestamped for Hourly {
  fn timestamp(&self) -> i64 {
    self.dt
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemp {
  pub day: f64,
  pub min: f64,
  pub max: f64,
  pub night: f64,
  pub eve: f64,
  pub morn: f64,
}

impl DailyTemp {
  pub fn empty() -> Self {
    Self {
      day: 0.0,
      min: 0.0,
      max: 0.0,
      night: 0.0,
      eve: 0.0,
      morn: 0.0,
    }
  }
}

impl Default for DailyTemp {
  fn default() -> Self {
    Self::empty()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeelsLike {
  pub day: f64,
  pub night: f64,
  pub eve: f64,
  pub morn: f64,
}

impl FeelsLike {
  pub fn empty() -> Self {
    Self {
      day: 0.0,
      night: 0.0,
      eve: 0.0,
      morn: 0.0,
    }
  }
}

impl Default for FeelsLike {
  fn default() -> Self {
    Self::empty()
  }
}

/// One day of the daily forecast.
///
/// Equality and hashing look at `dt` only, so a `HashSet<Daily>` holds one
/// record per day no matter how the other fields differ. Unlike hourly and
/// current records, `rain` and `snow` here are plain daily totals in mm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Daily {
  pub dt: i64,
  pub sunrise: i64,
  pub sunset: i64,
  pub temp: DailyTemp,
  pub feels_like: FeelsLike,
  pub pressure: i64,
  pub humidity: i64,
  pub dew_point: f64,
  pub wind_speed: f64,
  pub wind_deg: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wind_gust: Option<f64>,
  pub weather: Vec<Condition>,
  pub clouds: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pop: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rain: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub snow: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uvi: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visibility: Option<i64>,
}

impl Daily {
  pub fn empty() -> Self {
    Self {
      dt: 0,
      sunrise: 0,
      sunset: 0,
      temp: DailyTemp::empty(),
      feels_like: FeelsLike::empty(),
      pressure: 0,
      humidity: 0,
      dew_point: 0.0,
      wind_speed: 0.0,
      wind_deg: 0,
      wind_gust: Some(0.0),
      weather: Vec::new(),
      clouds: 0,
      pop: Some(0.0),
      rain: Some(0.0),
      snow: Some(0.0),
      uvi: Some(0.0),
      visibility: Some(0),
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
}

impl Default for Daily {
  fn default() -> Self {
    Self::empty()
  }
}

impl Timestamped for Daily {
  fn timestamp(&self) -> i64 {
    self.dt
  }
}

impl PartialEq for Daily {
  fn eq(&self, other: &Self) -> bool {
    self.dt == other.dt
  }
}

impl Eq for Daily {}

impl Hash for Daily {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.dt.hash(state);
  }
}
