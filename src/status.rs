use chrono::Utc;
use site_core::{
    render_status, DisplayVariant, OpenState, SiteConfig, StatusResult, StatusTarget,
    STATUS_REFRESH_MS,
};
use web_sys as web;

use crate::constants::{
    OPEN_STATE_ATTR, OPEN_STATUS_HERO_CLASS, OPEN_STATUS_SELECTOR, SITE_CONFIG_ID,
};
use crate::dom;

/// A `.open-status` element on the page.
struct ElementTarget(web::Element);

impl StatusTarget for ElementTarget {
    fn variant(&self) -> DisplayVariant {
        if self.0.class_list().contains(OPEN_STATUS_HERO_CLASS) {
            DisplayVariant::Hero
        } else {
            DisplayVariant::Full
        }
    }

    fn show(&mut self, message: &str, state: OpenState) {
        self.0.set_text_content(Some(message));
        _ = self.0.set_attribute(OPEN_STATE_ATTR, state.as_str());
    }
}

/// Site config from the page's `#site-config` JSON block, or the built-in
/// default when it is absent or invalid.
pub fn load_config(document: &web::Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[status] ignoring #{}: {}", SITE_CONFIG_ID, e);
            SiteConfig::default()
        }
    }
}

/// Evaluate once against a single clock sample.
#[inline]
pub fn current_status(config: &SiteConfig) -> StatusResult {
    config.status_at(Utc::now())
}

fn refresh(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let mut targets: Vec<ElementTarget> = dom::query_all(document, OPEN_STATUS_SELECTOR)?
        .into_iter()
        .map(ElementTarget)
        .collect();
    if targets.is_empty() {
        return Ok(());
    }
    let status = current_status(config);
    log::debug!(
        "[status] {} -> {} targets",
        status.state.as_str(),
        targets.len()
    );
    render_status(&status, &mut targets);
    Ok(())
}

pub fn setup_open_status(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if dom::query_all(document, OPEN_STATUS_SELECTOR)?.is_empty() {
        return Ok(());
    }

    let config = load_config(document);
    // A bad zone survives loading; every refresh will show the fallback
    if let Err(e) = config.validate() {
        log::warn!("[status] site config problem: {}", e);
    }
    refresh(document, &config)?;

    let document = document.clone();
    dom::set_interval(window, STATUS_REFRESH_MS, move || {
        if let Err(e) = refresh(&document, &config) {
            log::error!("[status] refresh failed: {:?}", e);
        }
    })?;
    Ok(())
}
