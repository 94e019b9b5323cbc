use site_core::{format_hour, format_hour_compact};

#[test]
fn midnight_and_noon_render_as_twelve() {
    assert_eq!(format_hour(0), "12:00 a.m.");
    assert_eq!(format_hour(12), "12:00 p.m.");
}

#[test]
fn morning_and_evening_hours() {
    assert_eq!(format_hour(1), "1:00 a.m.");
    assert_eq!(format_hour(11), "11:00 a.m.");
    assert_eq!(format_hour(13), "1:00 p.m.");
    assert_eq!(format_hour(21), "9:00 p.m.");
    assert_eq!(format_hour(23), "11:00 p.m.");
}

#[test]
fn period_follows_the_24_hour_value() {
    for h in 0..12 {
        assert!(format_hour(h).ends_with("a.m."), "hour {h}");
    }
    for h in 12..24 {
        assert!(format_hour(h).ends_with("p.m."), "hour {h}");
    }
}

#[test]
fn compact_form_drops_minutes() {
    assert_eq!(format_hour_compact(21), "9 p.m.");
    assert_eq!(format_hour_compact(23), "11 p.m.");
    assert_eq!(format_hour_compact(0), "12 a.m.");
    assert_eq!(format_hour_compact(12), "12 p.m.");
}
