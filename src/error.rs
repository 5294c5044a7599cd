use thiserror::Error;

/// Failure to obtain a reading from the time endpoint. Always recovered by
/// falling back to the device clock.
#[derive(Debug, Error)]
pub enum TimeSourceError {
    #[error("time request failed: {0}")]
    Network(String),
    #[error("time endpoint answered with status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("malformed time response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("date out of range: day={day} month={month}")]
    OutOfRange { day: u32, month: u32 },
}

/// Why the page config block could not be used. Defaults apply instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no #{0} block on the page")]
    Missing(&'static str),
    #[error("invalid calendar config: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Why a click on a day box did not start the opening animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickRejection {
    #[error("the current date is not known yet")]
    NotReady,
    #[error("this day is not unlocked yet")]
    NotUnlocked,
}
