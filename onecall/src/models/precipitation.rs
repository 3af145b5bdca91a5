// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rain or snow volume (mm) over the trailing 1h and 3h windows.
///
/// The API sometimes sends `"rain": {}`, so each window is decoded on its own
/// and a missing or non-numeric window is simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Precipitation {
  #[serde(rename = "1h", skip_serializing_if = "Option::is_none")]
  pub one_hour: Option<f64>,
  #[serde(rename = "3h", skip_serializing_if = "Option::is_none")]
  pub three_hours: Option<f64>,
}

impl Precipitation {
  pub fn empty() -> Self {
    Self {
      one_hour: Some(0.0),
      three_hours: Some(0.0),
    }
  }
}

impl Default for Precipitation {
  fn default() -> Self {
    Self::empty()
  }
}

impl<'de> Deserialize<'de> for Precipitation {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    #[derive(Deserialize)]
    struct Windows {
      #[serde(rename = "1h", default)]
      one_hour: Option<Value>,
      #[serde(rename = "3h", default)]
      three_hours: Option<Value>,
    }

    let windows = Windows::deserialize(deserializer)?;
    Ok(Self {
      one_hour: windows.one_hour.as_ref().and_then(Value::as_f64),
      three_hours: windows.three_hours.as_ref().and_then(Value::as_f64),
    })
  }
}
