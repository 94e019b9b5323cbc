// DOM hooks shared with the page markup and stylesheet.
//
// Class names are toggled on elements; ids are looked up directly. Selectors
// are derived by hand and must stay in sync with the class they select.

// Header
pub const SITE_HEADER_SELECTOR: &str = ".site-header";
pub const IS_SCROLLED_CLASS: &str = "is-scrolled";

// Mobile navigation
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const PRIMARY_NAV_ID: &str = "primaryNav";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const IS_OPEN_CLASS: &str = "is-open";
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const IS_VISIBLE_CLASS: &str = "is-visible";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Preloader
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_VIDEO_ID: &str = "preloaderVideo";
pub const IS_EXITING_CLASS: &str = "is-exiting";
pub const IS_HIDDEN_CLASS: &str = "is-hidden";
pub const BODY_REVEALING_CLASS: &str = "is-revealing";
pub const BODY_LOADED_CLASS: &str = "is-loaded";

// Hours status
pub const OPEN_STATUS_SELECTOR: &str = ".open-status";
pub const OPEN_STATUS_HERO_CLASS: &str = "open-status--hero"; // compact message variant
pub const OPEN_STATE_ATTR: &str = "data-open-state";
pub const SITE_CONFIG_ID: &str = "site-config"; // optional JSON override

// Footer
pub const YEAR_ID: &str = "year";
