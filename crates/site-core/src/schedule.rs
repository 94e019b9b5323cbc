//! Weekly opening schedule.
//!
//! A schedule is seven [`DayStatus`] entries indexed by day-index
//! (0 = Sunday .. 6 = Saturday). Open days carry a [`DaySlot`] with whole
//! opening and closing hours on the 24-hour clock. Slots never wrap past
//! midnight: `open_hour < close_hour` always holds for a valid schedule.

use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("{label}: opening hour {open_hour} is not before closing hour {close_hour}")]
    InvertedSlot {
        label: String,
        open_hour: u8,
        close_hour: u8,
    },
    #[error("{label}: hour {hour} is outside 0-23")]
    HourOutOfRange { label: String, hour: u8 },
}

/// Opening hours for a single day plus the name used when announcing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    #[serde(rename = "open")]
    pub open_hour: u8,
    #[serde(rename = "close")]
    pub close_hour: u8,
    pub label: String,
}

impl DaySlot {
    pub fn new(open_hour: u8, close_hour: u8, label: impl Into<String>) -> Self {
        Self {
            open_hour,
            close_hour,
            label: label.into(),
        }
    }

    /// Opening boundary is inclusive, closing boundary exclusive.
    #[inline]
    pub fn contains(&self, hour_of_day: f64) -> bool {
        f64::from(self.open_hour) <= hour_of_day && hour_of_day < f64::from(self.close_hour)
    }

    #[inline]
    pub fn opens_after(&self, hour_of_day: f64) -> bool {
        hour_of_day < f64::from(self.open_hour)
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        for hour in [self.open_hour, self.close_hour] {
            if hour > 23 {
                return Err(ScheduleError::HourOutOfRange {
                    label: self.label.clone(),
                    hour,
                });
            }
        }
        if self.open_hour >= self.close_hour {
            return Err(ScheduleError::InvertedSlot {
                label: self.label.clone(),
                open_hour: self.open_hour,
                close_hour: self.close_hour,
            });
        }
        Ok(())
    }
}

/// One day of the week: closed all day, or open for a slot.
///
/// Serialized as `null` for a closed day and as the slot object otherwise,
/// which keeps hand-written config tables short.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<DaySlot>", into = "Option<DaySlot>")]
pub enum DayStatus {
    #[default]
    Closed,
    Open(DaySlot),
}

impl DayStatus {
    pub fn open(open_hour: u8, close_hour: u8, label: impl Into<String>) -> Self {
        DayStatus::Open(DaySlot::new(open_hour, close_hour, label))
    }

    #[inline]
    pub fn slot(&self) -> Option<&DaySlot> {
        match self {
            DayStatus::Open(slot) => Some(slot),
            DayStatus::Closed => None,
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, DayStatus::Closed)
    }
}

impl From<Option<DaySlot>> for DayStatus {
    fn from(slot: Option<DaySlot>) -> Self {
        slot.map_or(DayStatus::Closed, DayStatus::Open)
    }
}

impl From<DayStatus> for Option<DaySlot> {
    fn from(day: DayStatus) -> Self {
        match day {
            DayStatus::Open(slot) => Some(slot),
            DayStatus::Closed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: [DayStatus; DAYS_PER_WEEK],
}

impl WeeklySchedule {
    pub fn new(days: [DayStatus; DAYS_PER_WEEK]) -> Self {
        Self { days }
    }

    /// A schedule with every day closed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Day-index wraps modulo seven so any offset arithmetic stays in range.
    #[inline]
    pub fn day(&self, day_index: usize) -> &DayStatus {
        &self.days[day_index % DAYS_PER_WEEK]
    }

    pub fn open_days(&self) -> usize {
        self.days.iter().filter(|d| !d.is_closed()).count()
    }

    /// Checks every open slot; the first defect found is returned.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.days
            .iter()
            .filter_map(DayStatus::slot)
            .try_for_each(DaySlot::validate)
    }
}
