//! Resolves today's date once per page load. The time endpoint reports the
//! UTC calendar date; when it cannot be reached the device's local date is used.

use crate::config::CalendarConfig;
use crate::error::TimeSourceError;
use crate::model::Reading;
use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

#[derive(Debug, Deserialize)]
struct TimeResponse {
    day: u32,
    month: u32,
    #[serde(default)]
    iso: Option<String>,
}

pub fn parse_time_response(body: &str) -> Result<(Reading, Option<String>), TimeSourceError> {
    let resp: TimeResponse = serde_json::from_str(body)?;
    let reading = Reading::new(resp.day, resp.month)?;
    Ok((reading, resp.iso))
}

async fn fetch_reading(endpoint: &str) -> Result<Reading, TimeSourceError> {
    let window = web_sys::window().ok_or_else(|| TimeSourceError::Network("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(|e| TimeSourceError::Network(format!("{:?}", e)))?;
    let resp: Response = value
        .dyn_into()
        .map_err(|_| TimeSourceError::Network("fetch did not return a Response".into()))?;
    if !resp.ok() {
        return Err(TimeSourceError::Status(resp.status()));
    }
    let text_promise = resp
        .text()
        .map_err(|e| TimeSourceError::Body(format!("{:?}", e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| TimeSourceError::Body(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| TimeSourceError::Body("response body is not text".into()))?;
    let (reading, iso) = parse_time_response(&body)?;
    info!("server time: {}", iso.as_deref().unwrap_or("(no iso)"));
    Ok(reading)
}

/// Local calendar date of the device.
pub fn device_reading() -> Reading {
    let now = js_sys::Date::new_0();
    let day = now.get_date();
    let month = now.get_month() + 1;
    Reading::new(day, month).unwrap_or_else(|e| {
        warn!("device clock unusable: {}", e);
        Reading::NEW_YEAR
    })
}

/// Never fails: a fixed test date wins, then the endpoint, then the device clock.
pub async fn get_today(config: &CalendarConfig) -> Reading {
    if let Some(reading) = config.test_date {
        info!(
            "test date active: day={} month={}",
            reading.day(),
            reading.month()
        );
        return reading;
    }
    match fetch_reading(&config.time_endpoint).await {
        Ok(reading) => reading,
        Err(e) => {
            warn!("server time failed ({}), falling back to device time", e);
            device_reading()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoint_payload() {
        let (reading, iso) =
            parse_time_response(r#"{"day":15,"month":12,"iso":"2025-12-15T08:00:00.000Z"}"#)
                .unwrap();
        assert_eq!((reading.day(), reading.month()), (15, 12));
        assert_eq!(iso.as_deref(), Some("2025-12-15T08:00:00.000Z"));
    }

    #[test]
    fn iso_is_optional() {
        let (reading, iso) = parse_time_response(r#"{"day":1,"month":12}"#).unwrap();
        assert_eq!(reading.day(), 1);
        assert!(iso.is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_time_response("<html>502</html>"),
            Err(TimeSourceError::Parse(_))
        ));
        assert!(matches!(
            parse_time_response(r#"{"day":"15","month":12}"#),
            Err(TimeSourceError::Parse(_))
        ));
    }

    #[test]
    fn out_of_range_date_is_rejected() {
        assert!(matches!(
            parse_time_response(r#"{"day":15,"month":13}"#),
            Err(TimeSourceError::OutOfRange { day: 15, month: 13 })
        ));
    }
}
