// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use onecall::{decode, decode_str, encode, IconCategory, Precipitation, Timestamped};

const FIXTURE: &str = include_str!("fixtures/onecall.json");

#[test]
fn decodes_full_report() {
  let response = decode_str(FIXTURE).unwrap();

  assert_eq!(response.lat, 39.99);
  assert_eq!(response.lon, -75.13);
  assert_eq!(response.timezone, "America/New_York");
  assert_eq!(response.timezone_offset, -14400);
  assert_eq!(response.minutely.len(), 2);
  assert_eq!(response.hourly.len(), 2);
  assert_eq!(response.daily.len(), 2);
  assert_eq!(response.alerts.len(), 1);
}

#[test]
fn current_with_empty_rain_object() {
  let response = decode_str(FIXTURE).unwrap();
  let current = response.current.as_ref().expect("current present");

  assert_eq!(
    current.rain,
    Some(Precipitation {
      one_hour: None,
      three_hours: None
    })
  );
  assert!(current.snow.is_none());
  assert_eq!(current.weather_icon(), IconCategory::Rain);
  assert_eq!(response.weather_info(), "Moderate Rain 292.6°");
  assert_eq!(current.date().timestamp(), 1_684_929_490);
  assert_eq!(
    response.local_time(current.sunrise).to_rfc3339(),
    "2023-05-24T07:10:45-04:00"
  );
}

#[test]
fn hourly_windows_and_optionals() {
  let response = decode_str(FIXTURE).unwrap();
  let (first, second) = (&response.hourly[0], &response.hourly[1]);

  assert!(first.rain.is_none());
  assert_eq!(first.pop, Some(0.15));
  assert_eq!(first.uvi, Some(0.0));

  assert_eq!(second.rain.and_then(|r| r.one_hour), Some(0.21));
  assert_eq!(second.rain.and_then(|r| r.three_hours), None);
  assert_eq!(second.snow.and_then(|s| s.three_hours), Some(0.05));
  assert_eq!(second.visibility, None);
  assert_eq!(second.wind_gust, None);
  assert_eq!(second.uvi, None);
}

#[test]
fn daily_records() {
  let response = decode_str(FIXTURE).unwrap();
  let (today, tomorrow) = (&response.daily[0], &response.daily[1]);

  assert_eq!(today.rain, Some(0.15));
  assert_eq!(today.pop, Some(0.47));
  assert_eq!(today.weather_icon(), IconCategory::Rain);
  assert_eq!(tomorrow.pop, None);
  assert_eq!(tomorrow.wind_gust, None);
  assert_eq!(tomorrow.weather_icon(), IconCategory::Clear);
  assert_eq!(response.daily_set().len(), 2);
}

#[test]
fn alert_fields() {
  let response = decode_str(FIXTURE).unwrap();
  let alert = &response.alerts[0];

  assert_eq!(alert.event, "Small Craft Advisory");
  assert_eq!(alert.tags, Some(Vec::new()));
  assert_eq!(alert.start_date().timestamp(), 1_684_952_747);
  assert_eq!(alert.end_date().timestamp(), 1_684_988_747);
}

#[test]
fn round_trip_is_stable() {
  let first = decode(FIXTURE.as_bytes()).unwrap();
  let second = decode(&encode(&first).unwrap()).unwrap();

  assert_eq!(first, second);
  assert_ne!(first.alerts[0].id, second.alerts[0].id);
  assert_eq!(first.current, second.current);
  assert_eq!(first.hourly, second.hourly);
  for (a, b) in first.daily.iter().zip(&second.daily) {
    assert_eq!(a.temp, b.temp);
    assert_eq!(a.feels_like, b.feels_like);
    assert_eq!(a.rain, b.rain);
    assert_eq!(a.pop, b.pop);
  }
}

#[test]
fn malformed_daily_element_fails_whole_response() {
  let mut json: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
  json["daily"][1]
    .as_object_mut()
    .unwrap()
    .remove("temp");

  assert!(onecall::decode_value(json).is_err());
}
