// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a `weather` array: the API's condition code plus its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
  pub id: i32,
  pub main: String,
  pub description: String,
  pub icon: String,
}

impl Condition {
  pub fn empty() -> Self {
    Self {
      id: 0,
      main: String::new(),
      description: String::new(),
      icon: String::new(),
    }
  }

  pub fn icon_category(&self) -> IconCategory {
    IconCategory::from_code(self.id)
  }
}

impl Default for Condition {
  fn default() -> Self {
    Self::empty()
  }
}

/// Display bucket for a condition code. Every code maps to exactly one
/// category; anything outside the known ranges lands in `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
  Thunderstorm,
  Drizzle,
  Rain,
  Snow,
  Atmosphere,
  Clear,
  PartlyCloudy,
  Default,
}

impl IconCategory {
  pub fn from_code(code: i32) -> Self {
    match code {
      200..=232 => IconCategory::Thunderstorm,
      300..=301 => IconCategory::Drizzle,
      500..=531 => IconCategory::Rain,
      600..=622 => IconCategory::Snow,
      701..=781 => IconCategory::Atmosphere,
      800 => IconCategory::Clear,
      801..=804 => IconCategory::PartlyCloudy,
      _ => IconCategory::Default,
    }
  }

  /// Category of the first condition, which is the one the API considers
  /// primary.
  pub fn from_conditions(conditions: &[Condition]) -> Self {
    conditions
      .first()
      .map_or(IconCategory::Default, Condition::icon_category)
  }

  pub fn icon_name(self) -> &'static str {
    match self {
      IconCategory::Thunderstorm => "cloud.bolt.rain",
      IconCategory::Drizzle => "cloud.drizzle",
      IconCategory::Rain => "cloud.rain",
      IconCategory::Snow => "cloud.snow",
      IconCategory::Atmosphere => "cloud.fog",
      IconCategory::Clear => "sun.max",
      IconCategory::PartlyCloudy => "cloud.sun",
      IconCategory::Default => "smiley",
    }
  }
}

impl fmt::Display for IconCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.icon_name())
  }
}

/// "Light rain 12.3°" style line built from the first condition. Empty when
/// there is no condition to describe.
pub(crate) fn summary(conditions: &[Condition], temp: f64) -> String {
  conditions
    .first()
    .map(|condition| format!("{} {:.1}°", capitalize_words(&condition.description), temp))
    .unwrap_or_default()
}

fn capitalize_words(text: &str) -> String {
  let mut capitalized = String::with_capacity(text.len());
  let mut word_start = true;
  for c in text.chars() {
    if c.is_whitespace() {
      capitalized.push(c);
      word_start = true;
    } else if word_start {
      capitalized.extend(c.to_uppercase());
      word_start = false;
    } else {
      capitalized.extend(c.to_lowercase());
    }
  }
  capitalized
}

#[cfg(test)]
mod tests {
  use super::*;

  fn condition(id: i32, description: &str) -> Condition {
    Condition {
      id,
      description: description.to_string(),
      ..Condition::empty()
    }
  }

  #[test]
  fn thunderstorm_range() {
    for code in 200..=232 {
      assert_eq!(IconCategory::from_code(code), IconCategory::Thunderstorm);
    }
  }

  #[test]
  fn maps_known_ranges() {
    assert_eq!(IconCategory::from_code(300), IconCategory::Drizzle);
    assert_eq!(IconCategory::from_code(301), IconCategory::Drizzle);
    assert_eq!(IconCategory::from_code(500), IconCategory::Rain);
    assert_eq!(IconCategory::from_code(531), IconCategory::Rain);
    assert_eq!(IconCategory::from_code(600), IconCategory::Snow);
    assert_eq!(IconCategory::from_code(622), IconCategory::Snow);
    assert_eq!(IconCategory::from_code(701), IconCategory::Atmosphere);
    assert_eq!(IconCategory::from_code(781), IconCategory::Atmosphere);
    assert_eq!(IconCategory::from_code(800), IconCategory::Clear);
    assert_eq!(IconCategory::from_code(801), IconCategory::PartlyCloudy);
    assert_eq!(IconCategory::from_code(804), IconCategory::PartlyCloudy);
  }

  #[test]
  fn codes_outside_ranges_use_default() {
    for code in [-1, 0, 199, 233, 302, 321, 532, 700, 805, 900, 962, 10_000] {
      assert_eq!(IconCategory::from_code(code), IconCategory::Default, "code {}", code);
    }
  }

  #[test]
  fn empty_condition_list_uses_default() {
    assert_eq!(IconCategory::from_conditions(&[]), IconCategory::Default);
  }

  #[test]
  fn first_condition_drives_category() {
    let conditions = [condition(800, "clear sky"), condition(211, "thunderstorm")];
    assert_eq!(IconCategory::from_conditions(&conditions), IconCategory::Clear);
    assert_eq!(IconCategory::Clear.to_string(), "sun.max");
  }

  #[test]
  fn summary_capitalizes_each_word() {
    let conditions = [condition(500, "light RAIN")];
    assert_eq!(summary(&conditions, 12.345), "Light Rain 12.3°");
  }

  #[test]
  fn summary_breaks_words_on_any_whitespace() {
    let conditions = [condition(500, "light\train\nand  SNOW")];
    assert_eq!(summary(&conditions, 1.2), "Light\tRain\nAnd  Snow 1.2°");
  }

  #[test]
  fn empty_condition_is_default() {
    assert_eq!(Condition::default(), Condition::empty());
    assert_eq!(Condition::empty().id, 0);
    assert_eq!(Condition::empty().icon_category(), IconCategory::Default);
  }

  #[test]
  fn summary_without_condition_is_empty() {
    assert_eq!(summary(&[], 21.0), "");
  }
}
