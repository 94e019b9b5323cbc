use site_core::is_header_scrolled;
use web_sys as web;

use crate::constants::{IS_SCROLLED_CLASS, SITE_HEADER_SELECTOR};
use crate::dom;

fn sync_header(window: &web::Window, header: &web::Element) {
    let scrolled = window.scroll_y().map(is_header_scrolled).unwrap_or(false);
    _ = header
        .class_list()
        .toggle_with_force(IS_SCROLLED_CLASS, scrolled);
}

/// Keep the header's scrolled style in step with the page offset.
pub fn setup_header_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(header) = document
        .query_selector(SITE_HEADER_SELECTOR)
        .map_err(dom::js_err)?
    else {
        return Ok(());
    };

    sync_header(window, &header);
    let window_scroll = window.clone();
    dom::add_listener_with_options(window, "scroll", true, false, move || {
        sync_header(&window_scroll, &header);
    })
}
