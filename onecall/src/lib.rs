// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod options;
pub mod provider;

pub use crate::config::OneCallConfig;
pub use ::config::{Part, Units, DEFAULT_ONECALL_URL};
pub use client::{FetchService, HttpFetcher};
pub use decode::{decode, decode_str, decode_value, encode};
pub use error::OneCallError;
pub use models::{
  Alert, Condition, Current, Daily, DailyTemp, FeelsLike, Hourly, IconCategory, Minutely,
  Precipitation, Response, Timestamped,
};
pub use options::Options;
pub use provider::{binding, Provider};

pub(crate) const REQUEST_TIMEOUT: std::time::Duration =
  std::time::Duration::from_secs(::config::DEFAULT_TIMEOUT_SECS);
