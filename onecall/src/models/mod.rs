// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod alert;
pub mod condition;
pub mod current;
pub mod forecast;
pub mod precipitation;
pub mod response;
pub mod time;

pub use alert::Alert;
pub use condition::{Condition, IconCategory};
pub use current::Current;
pub use forecast::{Daily, DailyTemp, FeelsLike, Hourly, Minutely};
pub use precipitation::Precipitation;
pub use response::Response;
pub use time::Timestamped;

use serde::{Deserialize, Deserializer};

/// Sequences the API may omit or send as `null` always decode to a `Vec`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
