// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Entry points from raw one call JSON to [`Response`].
//!
//! Decoding is all-or-nothing: a required field that is missing or has the
//! wrong type anywhere in the document, including inside a single forecast
//! element, fails the whole response.
use crate::{error::OneCallError, models::Response};
use tracing::debug;

pub fn decode(bytes: &[u8]) -> Result<Response, OneCallError> {
  let response: Response = serde_json::from_slice(bytes)?;
  log_decoded(&response);
  Ok(response)
}

pub fn decode_str(json: &str) -> Result<Response, OneCallError> {
  decode(json.as_bytes())
}

pub fn decode_value(value: serde_json::Value) -> Result<Response, OneCallError> {
  let response: Response = serde_json::from_value(value)?;
  log_decoded(&response);
  Ok(response)
}

/// Re-encodes a response with the API's own key names.
pub fn encode(response: &Response) -> Result<Vec<u8>, OneCallError> {
  Ok(serde_json::to_vec(response)?)
}

fn log_decoded(response: &Response) {
  debug!(
    "Decoded one call response for ({}, {}): current={}, minutely={}, hourly={}, daily={}, alerts={}",
    response.lat,
    response.lon,
    response.current.is_some(),
    response.minutely.len(),
    response.hourly.len(),
    response.daily.len(),
    response.alerts.len()
  );
}
