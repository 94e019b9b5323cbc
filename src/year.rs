use web_sys as web;

use crate::constants::YEAR_ID;

#[inline]
pub fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
