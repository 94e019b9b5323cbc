//! Projection of a clock sample into the site's wall-clock day and hour.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("unknown time zone identifier {0:?}")]
    UnknownZone(String),
}

pub fn parse_zone(name: &str) -> Result<Tz, ClockError> {
    name.parse::<Tz>()
        .map_err(|_| ClockError::UnknownZone(name.to_owned()))
}

/// Wall-clock position within the week at one instant.
///
/// `hour_of_day` is the hour plus fractional minutes, in `[0, 24)`. Seconds
/// are dropped so a display refreshed within the same minute never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentMoment {
    pub day_index: u8,
    pub hour_of_day: f64,
}

impl CurrentMoment {
    pub fn new(day_index: u8, hour_of_day: f64) -> Self {
        debug_assert!(day_index < 7, "day index {day_index} out of range");
        debug_assert!((0.0..24.0).contains(&hour_of_day));
        Self {
            day_index,
            hour_of_day,
        }
    }

    pub fn at(weekday: Weekday, hour: u32, minute: u32) -> Self {
        Self::new(
            weekday.num_days_from_sunday() as u8,
            f64::from(hour) + f64::from(minute) / 60.0,
        )
    }

    pub fn from_datetime<Z: TimeZone>(datetime: &DateTime<Z>) -> Self {
        Self::at(datetime.weekday(), datetime.hour(), datetime.minute())
    }

    /// Project a single clock sample into `zone`.
    pub fn project(instant: DateTime<Utc>, zone: &str) -> Result<Self, ClockError> {
        let tz = parse_zone(zone)?;
        Ok(Self::from_datetime(&instant.with_timezone(&tz)))
    }

    #[inline]
    pub fn day(&self) -> usize {
        usize::from(self.day_index)
    }
}
