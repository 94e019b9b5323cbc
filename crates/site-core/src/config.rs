use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hours::{evaluate, StatusResult};
use crate::moment::{parse_zone, ClockError, CurrentMoment};
use crate::schedule::{DayStatus, ScheduleError, WeeklySchedule, WEEKDAY_LABELS};

pub const DEFAULT_TIMEZONE: &str = "America/Toronto";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not deserialize site config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Site-wide settings for the hours display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub timezone: String,
    pub schedule: WeeklySchedule,
}

impl Default for SiteConfig {
    /// Closed Mondays; 11 a.m. to 9 p.m. Sunday and Tuesday through Thursday,
    /// 11 a.m. to 11 p.m. Friday and Saturday.
    fn default() -> Self {
        let [sun, _mon, tue, wed, thu, fri, sat] = WEEKDAY_LABELS;
        Self {
            timezone: DEFAULT_TIMEZONE.to_owned(),
            schedule: WeeklySchedule::new([
                DayStatus::open(11, 21, sun),
                DayStatus::Closed,
                DayStatus::open(11, 21, tue),
                DayStatus::open(11, 21, wed),
                DayStatus::open(11, 21, thu),
                DayStatus::open(11, 23, fri),
                DayStatus::open(11, 23, sat),
            ]),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config and validate its schedule. Closed days are `null`:
    ///
    /// ```json
    /// { "timezone": "America/Toronto",
    ///   "schedule": [{ "open": 11, "close": 21, "label": "Sunday" }, null, ...] }
    /// ```
    ///
    /// The zone is not checked here: a config with an unknown zone still
    /// loads, and [`SiteConfig::status_at`] renders the "Hours unavailable"
    /// fallback for it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.schedule.validate()?;
        log::debug!(
            "[config] loaded tz={} open_days={}",
            config.timezone,
            config.schedule.open_days()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_zone(&self.timezone)?;
        self.schedule.validate()?;
        Ok(())
    }

    /// Evaluate the schedule at one clock sample. An unknown zone yields the
    /// "Hours unavailable" fallback rather than an error.
    pub fn status_at(&self, instant: DateTime<Utc>) -> StatusResult {
        match CurrentMoment::project(instant, &self.timezone) {
            Ok(now) => evaluate(&self.schedule, now),
            Err(e) => {
                log::warn!("[config] {e}; showing fallback status");
                StatusResult::unavailable()
            }
        }
    }
}
