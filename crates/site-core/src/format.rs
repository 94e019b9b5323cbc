/// Render a 24-hour value as `H:00 a.m.` / `H:00 p.m.`.
///
/// Midnight and noon both render as 12; the period is decided on the 24-hour
/// value, before it is folded onto the 12-hour dial.
pub fn format_hour(hour24: u8) -> String {
    let period = if hour24 >= 12 { "p.m." } else { "a.m." };
    let normalized = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{normalized}:00 {period}")
}

/// Short form used by the hero banner: `9 p.m.` instead of `9:00 p.m.`.
pub fn format_hour_compact(hour24: u8) -> String {
    format_hour(hour24).replacen(":00 ", " ", 1)
}
