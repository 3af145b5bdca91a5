// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use ::config::{OneCallSettings, Part, Units};

/// Per-request query options: unit system, description language and the
/// response blocks to leave out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
  pub units: Units,
  pub lang: Option<String>,
  pub exclude: Vec<Part>,
}

impl Options {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn units(mut self, units: Units) -> Self {
    self.units = units;
    self
  }

  pub fn lang(mut self, lang: impl Into<String>) -> Self {
    self.lang = Some(lang.into());
    self
  }

  pub fn exclude(mut self, part: Part) -> Self {
    if !self.exclude.contains(&part) {
      self.exclude.push(part);
    }
    self
  }

  pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if self.units != Units::Standard {
      pairs.push(("units", self.units.to_string()));
    }

    if let Some(lang) = self.lang.as_deref().filter(|l| !l.trim().is_empty()) {
      pairs.push(("lang", lang.to_string()));
    }

    if !self.exclude.is_empty() {
      let exclude = self
        .exclude
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
      pairs.push(("exclude", exclude));
    }

    pairs
  }
}

impl From<&OneCallSettings> for Options {
  fn from(settings: &OneCallSettings) -> Self {
    let options = Self {
      units: settings.units,
      lang: settings.lang.clone(),
      exclude: Vec::new(),
    };
    settings
      .exclude
      .iter()
      .fold(options, |options, part| options.exclude(*part))
  }
}
