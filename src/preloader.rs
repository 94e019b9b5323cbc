use std::rc::Rc;

use site_core::{CloseReason, PreloaderGate, PreloaderTiming};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{
    BODY_LOADED_CLASS, BODY_REVEALING_CLASS, IS_EXITING_CLASS, IS_HIDDEN_CLASS, PRELOADER_ID,
    PRELOADER_VIDEO_ID,
};
use crate::dom;

/// Run the exit transition: fade, then hide and mark the page loaded, then
/// drop the node.
fn hide_preloader(
    window: &web::Window,
    document: &web::Document,
    preloader: &web::Element,
    timing: PreloaderTiming,
) -> anyhow::Result<()> {
    dom::add_class(preloader, IS_EXITING_CLASS);
    dom::add_body_class(document, BODY_REVEALING_CLASS);

    let preloader_hide = preloader.clone();
    let document_hide = document.clone();
    dom::set_timeout(window, timing.hide_delay_ms(), move || {
        dom::add_class(&preloader_hide, IS_HIDDEN_CLASS);
        dom::add_body_class(&document_hide, BODY_LOADED_CLASS);
    })?;

    let preloader_remove = preloader.clone();
    dom::set_timeout(window, timing.remove_delay_ms(), move || {
        preloader_remove.remove();
    })?;
    Ok(())
}

pub fn setup_preloader(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(preloader) = document.get_element_by_id(PRELOADER_ID) else {
        dom::add_body_class(document, BODY_LOADED_CLASS);
        return Ok(());
    };

    let timing = PreloaderTiming::default();
    let gate = Rc::new(PreloaderGate::new());
    let close: Rc<dyn Fn(CloseReason)> = {
        let window = window.clone();
        let document = document.clone();
        Rc::new(move |reason: CloseReason| {
            if !gate.try_close(reason) {
                return;
            }
            if let Err(e) = hide_preloader(&window, &document, &preloader, timing) {
                log::error!("[preloader] exit failed: {:?}", e);
            }
        })
    };

    if dom::prefers_reduced_motion(window) {
        close(CloseReason::ReducedMotion);
        return Ok(());
    }

    let close_fallback = close.clone();
    let fallback_timer = dom::set_timeout(window, timing.fallback_delay_ms(), move || {
        close_fallback(CloseReason::FallbackTimer)
    })?;

    let video = document
        .get_element_by_id(PRELOADER_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok());
    if let Some(video) = video {
        for (event, reason) in [
            ("ended", CloseReason::VideoEnded),
            ("error", CloseReason::VideoError),
        ] {
            let close_event = close.clone();
            dom::add_listener_with_options(&video, event, false, true, move || {
                close_event(reason)
            })?;
        }

        match video.play() {
            Ok(promise) => {
                let close_play = close.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[preloader] intro video did not play: {:?}", e);
                        close_play(CloseReason::PlayRejected);
                    }
                });
            }
            Err(e) => {
                log::warn!("[preloader] play() threw: {:?}", e);
                close(CloseReason::PlayRejected);
            }
        }
    }

    let window_pagehide = window.clone();
    dom::add_listener_with_options(window, "pagehide", false, true, move || {
        window_pagehide.clear_timeout_with_handle(fallback_timer);
    })
}
