use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::REDUCED_MOTION_QUERY;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Collect a `NodeList` into elements, skipping non-element nodes.
pub fn elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(&list))
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Like [`add_listener`] with explicit `passive` / `once` options.
pub fn add_listener_with_options(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    once: bool,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    options.set_once(once);
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Schedule `handler` once after `delay_ms`; returns the timer handle.
pub fn set_timeout(
    window: &web::Window,
    delay_ms: i32,
    handler: impl FnOnce() + 'static,
) -> anyhow::Result<i32> {
    let callback = Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .map_err(js_err)
}

pub fn set_interval(
    window: &web::Window,
    period_ms: i32,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<i32> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(handle)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn add_body_class(document: &web::Document, class: &str) {
    if let Some(body) = document.body() {
        add_class(&body, class);
    }
}
