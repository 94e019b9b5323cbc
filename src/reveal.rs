use site_core::{REVEAL_FALLBACK_MS, REVEAL_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{IS_VISIBLE_CLASS, REVEAL_SELECTOR};
use crate::dom;

fn reveal_all(nodes: &[web::Element]) {
    for node in nodes {
        dom::add_class(node, IS_VISIBLE_CLASS);
    }
}

/// Show `.reveal` blocks as they scroll into view.
pub fn setup_reveal_animations(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let nodes = dom::query_all(document, REVEAL_SELECTOR)?;
    if nodes.is_empty() {
        return Ok(());
    }

    if dom::prefers_reduced_motion(window) {
        reveal_all(&nodes);
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                dom::add_class(&target, IS_VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    callback.forget();

    for node in &nodes {
        observer.observe(node);
    }
    log::debug!("[reveal] observing {} nodes", nodes.len());

    // Nothing stays hidden for visitors who never scroll
    dom::set_timeout(window, REVEAL_FALLBACK_MS, move || reveal_all(&nodes))?;
    Ok(())
}
