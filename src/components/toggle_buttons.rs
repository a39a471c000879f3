//! Like / follow / bookmark buttons.
//!
//! DESIGN
//! ======
//! Templates call `toggleLike(this, id)` and friends from inline handlers;
//! [`toggle`] is what those globals forward to. The button's current class
//! decides which endpoint to hit, and the DOM is only rewritten from a
//! successful acknowledgement ([`ToggleState::acknowledge`]).
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and refused toggles are logged at error level and the
//! button is left exactly as it was. Nothing retries; overlapping clicks are
//! last-response-wins.

use wasm_bindgen::{JsCast, JsValue};

use crate::config::ToggleConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::ToggleAck;
use crate::state::toggle::{ToggleKind, ToggleState, parse_count_text, view_for};
use crate::util::dom;

const COUNT_SELECTOR: &str = ".like-count";

/// Sync every like button on the page with the server's view.
pub fn install(cfg: &ToggleConfig) {
    for button in dom::query_all(&cfg.like_selector) {
        let Some(post_id) = button.get_attribute(&cfg.like_id_attribute) else {
            continue;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_like_status(&post_id).await {
                Ok(status) => apply(&button, ToggleKind::Like, ToggleState::from_like_status(&status)),
                Err(err) => log::error!("loading like state for post {post_id} failed [{}]: {err}", err.code()),
            }
        });
    }
}

/// Flip `button` through the server.
pub fn toggle(kind: ToggleKind, button: web_sys::Element, target_id: String) {
    let current = read_state(kind, &button);
    leptos::task::spawn_local(async move {
        let outcome = api::send_toggle(kind, &target_id, current.active).await;
        settle(&button, kind, &target_id, current, outcome);
    });
}

/// Apply the server's answer to a click made while `button` showed
/// `current`. Anything but an accepted acknowledgement leaves it untouched.
pub fn settle(
    button: &web_sys::Element,
    kind: ToggleKind,
    target_id: &str,
    current: ToggleState,
    outcome: Result<ToggleAck, ApiError>,
) {
    let next = outcome.and_then(|ack| {
        current
            .acknowledge(kind, &ack)
            .ok_or_else(|| ApiError::Rejected { path: api::toggle_path(kind, target_id, current.active) })
    });
    match next {
        Ok(state) => apply(button, kind, state),
        Err(err) => log::error!("{} {target_id} failed [{}]: {err}", kind.name(), err.code()),
    }
}

/// Id argument from an inline handler: templates pass numbers or strings.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn target_id_from_js(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    value.as_f64().filter(|n| n.is_finite() && n.fract() == 0.0).map(|n| format!("{}", n as i64))
}

/// State as currently rendered on `button`.
#[must_use]
pub fn read_state(kind: ToggleKind, button: &web_sys::Element) -> ToggleState {
    let active = button.class_list().contains(kind.active_class());
    let count = match kind {
        ToggleKind::Like => dom::query_first(button, COUNT_SELECTOR)
            .and_then(|el| el.text_content())
            .and_then(|text| parse_count_text(&text)),
        ToggleKind::Follow | ToggleKind::Bookmark => None,
    };
    ToggleState { active, count }
}

/// Element holding the text label for `kind`.
fn label_element(kind: ToggleKind, button: &web_sys::Element) -> Option<web_sys::Element> {
    match kind {
        // Like buttons render `<i> <span>Like</span> <span class="like-count">`.
        ToggleKind::Like => dom::query_first(button, "span:nth-child(2)"),
        ToggleKind::Follow => dom::query_first(button, "span"),
        ToggleKind::Bookmark => None,
    }
}

fn apply(button: &web_sys::Element, kind: ToggleKind, state: ToggleState) {
    dom::set_class(button, kind.active_class(), state.active);
    let view = view_for(kind, state);

    if let (Some(label), Some(el)) = (view.label, label_element(kind, button)) {
        dom::set_text(&el, label);
    }
    if let (Some(icon), Some(el)) = (view.icon_class, dom::query_first(button, "i")) {
        el.set_class_name(icon);
    }
    if let (Some(text), Some(el)) = (view.count_text.as_deref(), dom::query_first(button, COUNT_SELECTOR)) {
        dom::set_text(&el, text);
    }
    if let Some(html) = button.dyn_ref::<web_sys::HtmlElement>() {
        if let Some(background) = view.background {
            dom::set_style(html, "background", background);
        }
        if let Some(border) = view.border_color {
            dom::set_style(html, "border-color", border);
        }
    }
}
