// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::time::epoch_to_utc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A weather advisory from a national warning system.
///
/// `id` is generated when the alert is decoded and is not part of the
/// payload: decoding the same JSON twice yields two different ids. Use
/// [`Alert::content_key`] to match alerts across fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
  #[serde(skip, default = "Uuid::new_v4")]
  pub id: Uuid,
  pub sender_name: String,
  pub event: String,
  pub start: i64,
  pub end: i64,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<String>>,
}

impl Alert {
  pub fn empty() -> Self {
    Self {
      id: Uuid::new_v4(),
      sender_name: String::new(),
      event: String::new(),
      start: 0,
      end: 0,
      description: String::new(),
      tags: Some(Vec::new()),
    }
  }

  pub fn start_date(&self) -> DateTime<Utc> {
    epoch_to_utc(self.start)
  }

  pub fn end_date(&self) -> DateTime<Utc> {
    epoch_to_utc(self.end)
  }

  pub fn content_key(&self) -> (&str, i64) {
    (&self.event, self.start)
  }

  pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
    self.start_date() <= at && at < self.end_date()
  }
}

impl Default for Alert {
  fn default() -> Self {
    Self::empty()
  }
}

// Content equality; the per-decode id is ignored.
impl PartialEq for Alert {
  fn eq(&self, other: &Self) -> bool {
    self.sender_name == other.sender_name
      && self.event == other.event
      && self.start == other.start
      && self.end == other.end
      && self.description == other.description
      && self.tags == other.tags
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALERT: &str = r#"{
    "sender_name": "NWS Philadelphia - Mount Holly",
    "event": "Small Craft Advisory",
    "start": 1684952747,
    "end": 1684988747,
    "description": "...SMALL CRAFT ADVISORY REMAINS IN EFFECT..."
  }"#;

  #[test]
  fn each_decode_gets_its_own_id() {
    let first: Alert = serde_json::from_str(ALERT).unwrap();
    let second: Alert = serde_json::from_str(ALERT).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first, second);
    assert_eq!(first.content_key(), second.content_key());
  }

  #[test]
  fn missing_tags_are_absent() {
    let alert: Alert = serde_json::from_str(ALERT).unwrap();
    assert!(alert.tags.is_none());
  }

  #[test]
  fn id_is_not_serialized() {
    let alert: Alert = serde_json::from_str(ALERT).unwrap();
    let json = serde_json::to_value(&alert).unwrap();
    assert!(json.get("id").is_none());
  }

  #[test]
  fn empty_alert_is_zeroed_with_fresh_id() {
    let first = Alert::empty();
    let second = Alert::default();

    assert_eq!(first.sender_name, "");
    assert_eq!(first.event, "");
    assert_eq!(first.description, "");
    assert_eq!(first.start, 0);
    assert_eq!(first.end, 0);
    assert_eq!(first.tags, Some(Vec::new()));
    assert_eq!(first, second);
    assert_ne!(first.id, second.id);
    assert_ne!(first.id, Alert::empty().id);
  }

  #[test]
  fn active_window_is_half_open() {
    let alert: Alert = serde_json::from_str(ALERT).unwrap();
    assert!(alert.is_active_at(alert.start_date()));
    assert!(!alert.is_active_at(alert.end_date()));
    assert_eq!(alert.start_date().timestamp(), 1_684_952_747);
  }
}
