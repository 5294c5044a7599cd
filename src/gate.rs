//! Which days may be opened for a given reading.
//!
//! Clicking is allowed up to and including today (`<=`), while only the days
//! strictly before today are shown as already opened on load (`<`).

use crate::model::{DAY_COUNT, Reading};

const DECEMBER: u8 = 12;

pub fn is_unlockable(day: u8, reading: &Reading) -> bool {
    reading.month() == DECEMBER && day <= reading.day()
}

pub fn is_pre_opened(day: u8, reading: &Reading) -> bool {
    reading.month() == DECEMBER && day < reading.day()
}

pub fn pre_opened_days(reading: Reading) -> impl Iterator<Item = u8> {
    (1..=DAY_COUNT).filter(move |d| is_pre_opened(*d, &reading))
}
