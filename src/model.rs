//! Calendar state: the session's date reading, the 24 day boxes and the
//! video overlay. Mutated only through [`CalendarAction`].

use crate::error::{ClickRejection, TimeSourceError};
use crate::gate::{is_unlockable, pre_opened_days};
use crate::layout::{Layout, Placement};
use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

pub const DAY_COUNT: u8 = 24;

/// Delay between entering `Opening` and settling on `Opened`.
pub const OPENING_MS: u32 = 450;

/// The current calendar date used for every unlock decision in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawReading")]
pub struct Reading {
    day: u8,
    month: u8,
}

impl Reading {
    pub const NEW_YEAR: Reading = Reading { day: 1, month: 1 };

    pub fn new(day: u32, month: u32) -> Result<Self, TimeSourceError> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(TimeSourceError::OutOfRange { day, month });
        }
        Ok(Self {
            day: day as u8,
            month: month as u8,
        })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

#[derive(Deserialize)]
struct RawReading {
    day: u32,
    month: u32,
}

impl TryFrom<RawReading> for Reading {
    type Error = TimeSourceError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        Reading::new(raw.day, raw.month)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxState {
    Locked,
    /// Short unwrap animation before the box settles.
    Opening,
    Opened,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayBox {
    pub day: u8,
    pub state: BoxState,
    pub placement: Placement,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Locked and allowed: start the opening animation with confetti at the box centre.
    Unlock { x: f64, y: f64 },
    /// Already opened: play the video again.
    Replay,
    /// The box is mid-animation; nothing to do.
    InProgress,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CalendarState {
    pub reading: Option<Reading>,
    pub boxes: Vec<DayBox>,
    /// Day whose video is currently shown.
    pub video: Option<u8>,
    /// Bumped on every relayout; keys the grid so boxes are rebuilt.
    pub layout_generation: u32,
    pub star: Option<(f64, f64)>,
}

impl CalendarState {
    pub fn is_ready(&self) -> bool {
        self.reading.is_some()
    }

    pub fn day_box(&self, day: u8) -> Option<&DayBox> {
        self.boxes.iter().find(|b| b.day == day)
    }

    fn day_box_mut(&mut self, day: u8) -> Option<&mut DayBox> {
        self.boxes.iter_mut().find(|b| b.day == day)
    }

    #[cfg(test)]
    pub fn opened_days(&self) -> Vec<u8> {
        let mut days: Vec<u8> = self
            .boxes
            .iter()
            .filter(|b| b.state == BoxState::Opened)
            .map(|b| b.day)
            .collect();
        days.sort_unstable();
        days
    }

    pub fn evaluate_click(&self, day: u8) -> Result<ClickOutcome, ClickRejection> {
        if !self.is_ready() {
            return Err(ClickRejection::NotReady);
        }
        let (Some(reading), Some(b)) = (self.reading, self.day_box(day)) else {
            return Ok(ClickOutcome::InProgress);
        };
        match b.state {
            BoxState::Opened => Ok(ClickOutcome::Replay),
            BoxState::Opening => Ok(ClickOutcome::InProgress),
            BoxState::Locked if !is_unlockable(day, &reading) => Err(ClickRejection::NotUnlocked),
            BoxState::Locked => {
                let (x, y) = b.placement.center();
                Ok(ClickOutcome::Unlock { x, y })
            }
        }
    }

    /// Mark every day strictly before today as opened.
    fn restore_opened(&mut self) {
        let Some(reading) = self.reading else { return };
        for day in pre_opened_days(reading) {
            if let Some(b) = self.day_box_mut(day) {
                b.state = BoxState::Opened;
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum CalendarAction {
    /// Replace all boxes with a fresh layout (startup and every resize).
    Relayout(Layout),
    ResolveReading(Reading),
    BeginOpening(u8),
    FinishOpening(u8),
    OpenVideo(u8),
    CloseVideo,
}

impl Reducible for CalendarState {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CalendarAction::*;
        let mut new = (*self).clone();
        match action {
            Relayout(layout) => {
                new.boxes = layout
                    .boxes
                    .iter()
                    .map(|p| DayBox {
                        day: p.day,
                        state: BoxState::Locked,
                        placement: *p,
                    })
                    .collect();
                new.star = Some((layout.top_star.x, layout.top_star.y));
                new.layout_generation = new.layout_generation.wrapping_add(1);
                new.restore_opened();
            }
            ResolveReading(reading) => {
                if new.reading.is_some() {
                    return self;
                }
                new.reading = Some(reading);
                new.restore_opened();
            }
            BeginOpening(day) => match new.evaluate_click(day) {
                Ok(ClickOutcome::Unlock { .. }) => {
                    if let Some(b) = new.day_box_mut(day) {
                        b.state = BoxState::Opening;
                    }
                }
                _ => return self,
            },
            FinishOpening(day) => {
                if let Some(b) = new.day_box_mut(day) {
                    if b.state == BoxState::Opening {
                        b.state = BoxState::Opened;
                    }
                }
                new.video = Some(day);
            }
            OpenVideo(day) => {
                if !matches!(new.day_box(day), Some(b) if b.state == BoxState::Opened) {
                    return self;
                }
                new.video = Some(day);
            }
            CloseVideo => {
                if new.video.is_none() {
                    return self;
                }
                new.video = None;
            }
        }
        Rc::new(new)
    }
}
