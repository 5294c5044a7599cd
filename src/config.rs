//! Page configuration, read from an inline JSON block so a deployment can
//! change endpoints, asset paths and texts without rebuilding.
//!
//! ```html
//! <script id="calendar-config" type="application/json">
//!   { "test_date": { "day": 15, "month": 12 } }
//! </script>
//! ```

use crate::error::ConfigError;
use crate::model::Reading;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub const CONFIG_ELEMENT_ID: &str = "calendar-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub time_endpoint: String,
    /// `{day}` is replaced with the day number.
    pub video_pattern: String,
    pub reindeer_image: String,
    /// Pretend it is this date instead of asking the time endpoint.
    pub test_date: Option<Reading>,
    pub not_ready_message: String,
    pub not_unlocked_message: String,
    pub log_level: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_endpoint: "/api/time".to_string(),
            video_pattern: "videos/day{day}.mp4".to_string(),
            reindeer_image: "images/reindeer.png".to_string(),
            test_date: None,
            not_ready_message: "Egy pillanat... ⏳".to_string(),
            not_unlocked_message: "Ha véletlen volt, korán vagy még! Ha direkt akkor EJNYE!"
                .to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the config block from the page. Runs before logging is set up,
    /// so the caller reports the outcome.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_block(read_config_block().as_deref())
    }

    fn from_block(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw.ok_or(ConfigError::Missing(CONFIG_ELEMENT_ID))?;
        Ok(Self::from_json(raw)?)
    }

    pub fn video_source(&self, day: u8) -> String {
        self.video_pattern.replace("{day}", &day.to_string())
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn read_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let script: HtmlScriptElement = element.dyn_into().ok()?;
    script.text().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = CalendarConfig::from_json("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.time_endpoint, "/api/time");
        assert!(config.test_date.is_none());
    }

    #[test]
    fn partial_config_overrides_fields() {
        let config = CalendarConfig::from_json(
            r#"{"test_date":{"day":15,"month":12},"video_pattern":"media/{day}.webm","log_level":"debug"}"#,
        )
        .unwrap();
        assert_eq!(config.test_date, Some(Reading::new(15, 12).unwrap()));
        assert_eq!(config.video_source(7), "media/7.webm");
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.reindeer_image, "images/reindeer.png");
    }

    #[test]
    fn invalid_test_date_is_an_error() {
        assert!(CalendarConfig::from_json(r#"{"test_date":{"day":0,"month":12}}"#).is_err());
    }

    #[test]
    fn default_video_naming() {
        let config = CalendarConfig::default();
        assert_eq!(config.video_source(1), "videos/day1.mp4");
        assert_eq!(config.video_source(24), "videos/day24.mp4");
    }

    #[test]
    fn block_outcomes() {
        assert!(matches!(
            CalendarConfig::from_block(None),
            Err(ConfigError::Missing(CONFIG_ELEMENT_ID))
        ));
        assert!(matches!(
            CalendarConfig::from_block(Some("{not json")),
            Err(ConfigError::Invalid(_))
        ));
        let config = CalendarConfig::from_block(Some(r#"{"log_level":"trace"}"#)).unwrap();
        assert_eq!(config.log_level(), log::Level::Trace);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = CalendarConfig::from_json(r#"{"log_level":"loud"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
