//! Marks the navigation link for the current section as active.

use wasm_bindgen::JsCast;

use crate::config::NavConfig;
use crate::util::dom;
use crate::util::nav::is_active_link;

pub fn install(cfg: &NavConfig) {
    let Some(current) = dom::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    for link in dom::query_all(&cfg.link_selector) {
        let Some(anchor) = link.dyn_ref::<web_sys::HtmlAnchorElement>() else {
            continue;
        };
        if is_active_link(&current, &anchor.pathname()) {
            dom::add_class(&link, &cfg.active_class);
        }
    }
}
