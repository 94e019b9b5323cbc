//! Open/closed status evaluation.
//!
//! [`evaluate`] is pure: it takes the weekly schedule and an already
//! projected [`CurrentMoment`] and never touches the clock. Rendering the
//! result into display targets is a separate step, [`render_status`], so the
//! web layer and tests can drive any number of targets with one evaluation.

use serde::Serialize;

use crate::format::{format_hour, format_hour_compact};
use crate::moment::CurrentMoment;
use crate::schedule::{DaySlot, WeeklySchedule, DAYS_PER_WEEK};

pub const HOURS_UNAVAILABLE: &str = "Hours unavailable";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    Open,
    Closed,
}

impl OpenState {
    /// Value written to the `data-open-state` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenState::Open => "open",
            OpenState::Closed => "closed",
        }
    }
}

/// Why the business is open or closed right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status<'a> {
    OpenUntil { close_hour: u8 },
    OpensToday { open_hour: u8 },
    /// Next open day found `offset` days ahead (1..=7).
    OpensLater { offset: usize, slot: &'a DaySlot },
    Unavailable,
}

/// Classify `now` against `schedule`.
///
/// The forward scan is bounded at seven days; with a single open day in the
/// week and `now` already past its close, it is found again at offset 7.
pub fn classify(schedule: &WeeklySchedule, now: CurrentMoment) -> Status<'_> {
    if let Some(today) = schedule.day(now.day()).slot() {
        if today.contains(now.hour_of_day) {
            return Status::OpenUntil {
                close_hour: today.close_hour,
            };
        }
        if today.opens_after(now.hour_of_day) {
            return Status::OpensToday {
                open_hour: today.open_hour,
            };
        }
    }

    for offset in 1..=DAYS_PER_WEEK {
        if let Some(slot) = schedule.day(now.day() + offset).slot() {
            return Status::OpensLater { offset, slot };
        }
    }

    log::debug!("[hours] no open day in schedule");
    Status::Unavailable
}

impl Status<'_> {
    pub fn state(&self) -> OpenState {
        match self {
            Status::OpenUntil { .. } => OpenState::Open,
            _ => OpenState::Closed,
        }
    }
}

/// Which message a display target shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayVariant {
    Full,
    Hero,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub state: OpenState,
    pub full_message: String,
    pub hero_message: String,
}

impl StatusResult {
    /// Terminal fallback, also used when the clock cannot be projected.
    pub fn unavailable() -> Self {
        Self {
            state: OpenState::Closed,
            full_message: HOURS_UNAVAILABLE.to_owned(),
            hero_message: HOURS_UNAVAILABLE.to_owned(),
        }
    }

    pub fn message(&self, variant: DisplayVariant) -> &str {
        match variant {
            DisplayVariant::Full => &self.full_message,
            DisplayVariant::Hero => &self.hero_message,
        }
    }
}

impl From<Status<'_>> for StatusResult {
    fn from(status: Status<'_>) -> Self {
        let state = status.state();
        let (full_message, hero_message) = match status {
            Status::OpenUntil { close_hour } => (
                format!("Open now • Closes at {}", format_hour(close_hour)),
                format!("Open now • Closes {}", format_hour_compact(close_hour)),
            ),
            Status::OpensToday { open_hour } => {
                let opens = format_hour(open_hour);
                (
                    format!("Closed now • Opens today at {opens}"),
                    format!("Closed • Opens today at {opens}"),
                )
            }
            Status::OpensLater { offset, slot } => {
                let when = if offset == 1 {
                    "tomorrow"
                } else {
                    slot.label.as_str()
                };
                let opens = format_hour(slot.open_hour);
                (
                    format!("Closed now • Opens {when} at {opens}"),
                    format!("Closed • Opens {when} at {opens}"),
                )
            }
            Status::Unavailable => return StatusResult::unavailable(),
        };
        Self {
            state,
            full_message,
            hero_message,
        }
    }
}

pub fn evaluate(schedule: &WeeklySchedule, now: CurrentMoment) -> StatusResult {
    classify(schedule, now).into()
}

/// Anything that can show an evaluated status.
pub trait StatusTarget {
    fn variant(&self) -> DisplayVariant;
    fn show(&mut self, message: &str, state: OpenState);
}

/// Write `status` into every target, each getting its own message variant.
pub fn render_status<T: StatusTarget>(status: &StatusResult, targets: &mut [T]) {
    for target in targets.iter_mut() {
        let message = status.message(target.variant());
        target.show(message, status.state);
    }
}
