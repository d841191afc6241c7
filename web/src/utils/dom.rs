//! DOM access outside the reactive tree

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::constants::LOADING_ELEMENT_ID;

/// Hide the static loading overlay once the wasm bundle has started.
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available; loading screen left in place");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading screen: {:?}", e);
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
