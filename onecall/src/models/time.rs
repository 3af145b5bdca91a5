// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Converts epoch seconds to UTC. Values chrono cannot represent map to the
/// Unix epoch so the conversion never fails.
pub fn epoch_to_utc(secs: i64) -> DateTime<Utc> {
  DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Converts epoch seconds to the wall clock of a location `offset_secs` east
/// of UTC. An offset outside ±24h falls back to UTC.
pub fn epoch_to_local(secs: i64, offset_secs: i32) -> DateTime<FixedOffset> {
  let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());
  epoch_to_utc(secs).with_timezone(&offset)
}

/// A record stamped with the API's `dt` field.
pub trait Timestamped {
  fn timestamp(&self) -> i64;

  fn date(&self) -> DateTime<Utc> {
    epoch_to_utc(self.timestamp())
  }
}
