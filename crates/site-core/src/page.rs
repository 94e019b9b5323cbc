// Page interaction tuning shared by the web front-end.

// Header gets its scrolled style once the page has moved this far (CSS px)
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 8.0;

// Fraction of a reveal node that must be on screen before it is shown
pub const REVEAL_THRESHOLD: f64 = 0.18;

// Everything is revealed after this long even without scrolling
pub const REVEAL_FALLBACK_MS: i32 = 1800;

// How often an open tab re-evaluates the hours display
pub const STATUS_REFRESH_MS: i32 = 60_000;

#[inline]
pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}
