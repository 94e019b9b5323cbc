// Host-side tests for the DOM hook names.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn class_selectors_are_single_classes() {
    for selector in [REVEAL_SELECTOR, OPEN_STATUS_SELECTOR, SITE_HEADER_SELECTOR] {
        assert!(selector.starts_with('.'));
        assert!(!selector[1..].contains(['.', ' ', '#']));
    }
}

#[test]
fn hero_class_is_a_modifier_of_status_class() {
    let status_class = &OPEN_STATUS_SELECTOR[1..];
    assert!(OPEN_STATUS_HERO_CLASS.starts_with(status_class));
    assert!(OPEN_STATUS_HERO_CLASS[status_class.len()..].starts_with("--"));
}

#[test]
fn ids_are_bare_names() {
    for id in [
        NAV_TOGGLE_ID,
        PRIMARY_NAV_ID,
        PRELOADER_ID,
        PRELOADER_VIDEO_ID,
        SITE_CONFIG_ID,
        YEAR_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "id {id:?} should not carry a selector prefix");
        assert!(!id.contains(char::is_whitespace));
    }
}

#[test]
fn state_classes_are_distinct() {
    let classes = [
        IS_SCROLLED_CLASS,
        IS_OPEN_CLASS,
        IS_VISIBLE_CLASS,
        IS_EXITING_CLASS,
        IS_HIDDEN_CLASS,
        BODY_REVEALING_CLASS,
        BODY_LOADED_CLASS,
    ];
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("is-"));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn attributes_are_well_formed() {
    assert!(OPEN_STATE_ATTR.starts_with("data-"));
    assert!(ARIA_EXPANDED_ATTR.starts_with("aria-"));
    assert!(REDUCED_MOTION_QUERY.starts_with('(') && REDUCED_MOTION_QUERY.ends_with(')'));
}
