use web_sys as web;

use crate::constants::{
    ARIA_EXPANDED_ATTR, IS_OPEN_CLASS, NAV_LINK_SELECTOR, NAV_TOGGLE_ID, PRIMARY_NAV_ID,
};
use crate::dom;

fn set_expanded(toggle: &web::Element, open: bool) {
    _ = toggle.set_attribute(ARIA_EXPANDED_ATTR, if open { "true" } else { "false" });
}

pub fn setup_mobile_nav(document: &web::Document) -> anyhow::Result<()> {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(PRIMARY_NAV_ID),
    ) else {
        return Ok(());
    };

    {
        let toggle_click = toggle.clone();
        let nav_click = nav.clone();
        dom::add_listener(&toggle, "click", move || {
            let open = nav_click
                .class_list()
                .toggle(IS_OPEN_CLASS)
                .unwrap_or(false);
            set_expanded(&toggle_click, open);
        })?;
    }

    // Following a link collapses the menu
    let links = dom::elements(&nav.query_selector_all(NAV_LINK_SELECTOR).map_err(dom::js_err)?);
    for link in links {
        let nav_link = nav.clone();
        let toggle_link = toggle.clone();
        dom::add_listener(&link, "click", move || {
            _ = nav_link.class_list().remove_1(IS_OPEN_CLASS);
            set_expanded(&toggle_link, false);
        })?;
    }
    Ok(())
}
