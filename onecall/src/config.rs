// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::error::OneCallError;
use ::config::OneCallSettings;
use std::time::Duration;

#[derive(Clone)]
pub struct OneCallConfig {
  pub(crate) api_key: String,
  pub(crate) url: String,
  pub(crate) timeout: Duration,
}

impl OneCallConfig {
  pub fn new(api_key: impl Into<String>, url: impl Into<String>) -> Result<Self, OneCallError> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(OneCallError::InvalidApiKey);
    }

    Ok(Self {
      api_key,
      url: url.into(),
      timeout: crate::REQUEST_TIMEOUT,
    })
  }

  pub fn from_settings(
    api_key: impl Into<String>,
    settings: &OneCallSettings,
  ) -> Result<Self, OneCallError> {
    Ok(
      Self::new(api_key, settings.url.clone())?
        .with_timeout(Duration::from_secs(settings.timeout_secs)),
    )
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn url(&self) -> &str {
    &self.url
  }
}

// The key ends up in request logs otherwise.
impl std::fmt::Debug for OneCallConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OneCallConfig")
      .field("api_key", &"***")
      .field("url", &self.url)
      .field("timeout", &self.timeout)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_blank_api_key() {
    let result = OneCallConfig::new("   ", crate::DEFAULT_ONECALL_URL);
    assert!(matches!(result, Err(OneCallError::InvalidApiKey)));
  }

  #[test]
  fn takes_url_and_timeout_from_settings() {
    let settings = OneCallSettings {
      url: "http://localhost:9000/onecall".into(),
      timeout_secs: 2,
      ..OneCallSettings::default()
    };
    let config = OneCallConfig::from_settings("secret", &settings).unwrap();

    assert_eq!(config.url(), "http://localhost:9000/onecall");
    assert_eq!(config.timeout, Duration::from_secs(2));
  }

  #[test]
  fn default_timeout_matches_settings_default() {
    let direct = OneCallConfig::new("secret", crate::DEFAULT_ONECALL_URL).unwrap();
    let from_settings = OneCallConfig::from_settings("secret", &OneCallSettings::default()).unwrap();

    assert_eq!(direct.timeout, Duration::from_secs(::config::DEFAULT_TIMEOUT_SECS));
    assert_eq!(direct.timeout, from_settings.timeout);
  }

  #[test]
  fn debug_output_hides_api_key() {
    let config = OneCallConfig::new("secret", crate::DEFAULT_ONECALL_URL).unwrap();
    assert!(!format!("{:?}", config).contains("secret"));
  }
}
