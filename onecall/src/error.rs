// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OneCallError {
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Failed to build API URL: {0}")]
  InvalidUrl(#[from] url::ParseError),
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),
  #[error("API request failed: {0}")]
  ApiError(String),
  #[error("Rate limit exceeded")]
  RateLimitExceeded,
  #[error("Failed to decode one call response: {0}")]
  Decode(#[from] serde_json::Error),
}
