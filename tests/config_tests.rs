// Host-side tests for schedule validation, config loading and clock projection.

use chrono::{TimeZone, Utc};
use site_core::*;

const CONFIG_JSON: &str = r#"{
    "timezone": "America/Toronto",
    "schedule": [
        { "open": 11, "close": 21, "label": "Sunday" },
        null,
        { "open": 11, "close": 21, "label": "Tuesday" },
        { "open": 11, "close": 21, "label": "Wednesday" },
        { "open": 11, "close": 21, "label": "Thursday" },
        { "open": 11, "close": 23, "label": "Friday" },
        { "open": 11, "close": 23, "label": "Saturday" }
    ]
}"#;

#[test]
fn default_config_is_valid() {
    let config = SiteConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.timezone, DEFAULT_TIMEZONE);
    assert_eq!(config.schedule.open_days(), 6);
    assert!(config.schedule.day(1).is_closed());
}

#[test]
fn json_config_matches_default() {
    let config = SiteConfig::from_json(CONFIG_JSON).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn closed_days_serialize_as_null() {
    let value = serde_json::to_value(SiteConfig::default()).unwrap();
    assert!(value["schedule"][1].is_null());
    assert_eq!(value["schedule"][5]["close"], 23);
    assert_eq!(value["schedule"][0]["label"], "Sunday");
}

#[test]
fn inverted_slot_is_rejected() {
    let json = CONFIG_JSON.replace(
        r#"{ "open": 11, "close": 23, "label": "Friday" }"#,
        r#"{ "open": 23, "close": 11, "label": "Friday" }"#,
    );
    match SiteConfig::from_json(&json) {
        Err(ConfigError::Schedule(ScheduleError::InvertedSlot {
            label,
            open_hour,
            close_hour,
        })) => {
            assert_eq!(label, "Friday");
            assert_eq!((open_hour, close_hour), (23, 11));
        }
        other => panic!("expected inverted slot, got {other:?}"),
    }
}

#[test]
fn equal_open_and_close_is_rejected() {
    let slot = DaySlot::new(11, 11, "Tuesday");
    assert!(matches!(
        slot.validate(),
        Err(ScheduleError::InvertedSlot { .. })
    ));
}

#[test]
fn hour_past_23_is_rejected() {
    let slot = DaySlot::new(11, 24, "Saturday");
    assert_eq!(
        slot.validate(),
        Err(ScheduleError::HourOutOfRange {
            label: "Saturday".into(),
            hour: 24
        })
    );
}

#[test]
fn unknown_zone_loads_but_fails_validation() {
    let json = CONFIG_JSON.replace("America/Toronto", "Mars/Olympus_Mons");
    let config = SiteConfig::from_json(&json).unwrap();
    assert_eq!(config.timezone, "Mars/Olympus_Mons");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Clock(ClockError::UnknownZone(_)))
    ));
}

#[test]
fn page_schedule_with_bad_zone_shows_unavailable() {
    let json = r#"{
        "timezone": "America/Torronto",
        "schedule": [null, null, { "open": 1, "close": 2, "label": "Tuesday" }, null, null, null, null]
    }"#;
    let config = SiteConfig::from_json(json).unwrap();
    assert_eq!(config.schedule.open_days(), 1);

    // Tuesday afternoon in Toronto; the built-in schedule would say open
    let instant = Utc.with_ymd_and_hms(2024, 7, 2, 18, 30, 0).unwrap();
    assert_eq!(config.status_at(instant), StatusResult::unavailable());
    assert_eq!(SiteConfig::default().status_at(instant).state, OpenState::Open);
}

#[test]
fn bad_schedule_is_rejected_even_with_bad_zone() {
    let json = CONFIG_JSON
        .replace("America/Toronto", "Nowhere/Land")
        .replace(r#""open": 11, "close": 23, "label": "Friday""#, r#""open": 23, "close": 11, "label": "Friday""#);
    assert!(matches!(
        SiteConfig::from_json(&json),
        Err(ConfigError::Schedule(ScheduleError::InvertedSlot { .. }))
    ));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json("{ \"timezone\": "),
        Err(ConfigError::Json(_))
    ));
    // A week has exactly seven entries
    let short = r#"{ "timezone": "America/Toronto", "schedule": [null, null] }"#;
    assert!(matches!(SiteConfig::from_json(short), Err(ConfigError::Json(_))));
}

#[test]
fn projection_uses_daylight_time_in_summer() {
    // 2024-07-02 is a Tuesday; Toronto is UTC-4
    let instant = Utc.with_ymd_and_hms(2024, 7, 2, 18, 30, 0).unwrap();
    let now = CurrentMoment::project(instant, "America/Toronto").unwrap();
    assert_eq!(now, CurrentMoment::new(2, 14.5));
}

#[test]
fn projection_can_cross_back_a_day() {
    // Tuesday 03:00 UTC is Monday 22:00 in Toronto (UTC-5 in January)
    let instant = Utc.with_ymd_and_hms(2024, 1, 16, 3, 0, 0).unwrap();
    let now = CurrentMoment::project(instant, "America/Toronto").unwrap();
    assert_eq!(now.day_index, 1);
    assert_eq!(now.hour_of_day, 22.0);
}

#[test]
fn projection_drops_seconds() {
    let instant = Utc.with_ymd_and_hms(2024, 7, 2, 18, 45, 59).unwrap();
    let now = CurrentMoment::project(instant, "UTC").unwrap();
    assert_eq!(now.hour_of_day, 18.75);
}

#[test]
fn status_at_projects_then_evaluates() {
    let config = SiteConfig::default();
    let instant = Utc.with_ymd_and_hms(2024, 7, 2, 18, 30, 0).unwrap();
    let status = config.status_at(instant);
    assert_eq!(status.state, OpenState::Open);
    assert_eq!(status.full_message, "Open now • Closes at 9:00 p.m.");

    let instant = Utc.with_ymd_and_hms(2024, 1, 16, 3, 0, 0).unwrap();
    assert_eq!(
        config.status_at(instant).full_message,
        "Closed now • Opens tomorrow at 11:00 a.m."
    );
}

#[test]
fn unknown_zone_falls_back_to_unavailable() {
    let config = SiteConfig {
        timezone: "Not/AZone".into(),
        ..SiteConfig::default()
    };
    let instant = Utc.with_ymd_and_hms(2024, 7, 2, 18, 30, 0).unwrap();
    assert_eq!(config.status_at(instant), StatusResult::unavailable());
    assert!(CurrentMoment::project(instant, "Not/AZone").is_err());
}
