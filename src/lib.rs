#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod header;
mod nav;
mod preloader;
mod reveal;
mod status;
mod year;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Current hours status as `{ state, fullMessage, heroMessage }`, for page
/// scripts that render it themselves.
#[wasm_bindgen(js_name = openStatus)]
pub fn open_status() -> Result<JsValue, JsValue> {
    let (_, document) =
        dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let status = status::current_status(&status::load_config(&document));
    let json = serde_json::to_string(&status).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // Each feature is independent; one failing must not take the rest down
    report("header", header::setup_header_scroll(&window, &document));
    report("nav", nav::setup_mobile_nav(&document));
    report("reveal", reveal::setup_reveal_animations(&window, &document));
    report("preloader", preloader::setup_preloader(&window, &document));
    report("status", status::setup_open_status(&window, &document));
    year::stamp_year(&document);
    Ok(())
}

fn report(feature: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] setup failed: {:?}", feature, e);
    }
}
