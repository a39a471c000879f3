//! Small page actions reachable from inline template handlers: copying a
//! post link, jumping to comments, shaking an element and typing text out.

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};

use crate::util::dom;
use crate::util::motion::{anchor_scroll_top, char_prefix};
use crate::util::nav::{anchor_target, comments_selector};

const COPY_OK: &str = "Post link copied to clipboard!";
const COPY_FAILED: &str = "Could not copy link";
const SHAKE_CLASS: &str = "shake";
const SHAKE_MS: u32 = 500;
pub const TYPEWRITER_SPEED_MS: u32 = 50;

/// Copy `origin + path` to the clipboard and tell the user how it went.
pub fn copy_post_link(path: &str) {
    let Some(win) = dom::window() else {
        return;
    };
    let origin = win.location().origin().unwrap_or_default();
    let link = format!("{origin}{path}");
    leptos::task::spawn_local(async move {
        let message = match write_clipboard(&win, &link).await {
            Ok(()) => COPY_OK,
            Err(err) => {
                log::warn!("clipboard write failed: {err:?}");
                COPY_FAILED
            }
        };
        if let Err(err) = win.alert_with_message(message) {
            log::debug!("alert: {err:?}");
        }
    });
}

// `navigator.clipboard` is looked up dynamically: it is missing on insecure
// origins and its binding type differs across web-sys releases.
async fn write_clipboard(win: &web_sys::Window, text: &str) -> Result<(), JsValue> {
    let clipboard = js_sys::Reflect::get(&win.navigator(), &JsValue::from_str("clipboard"))?;
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into::<js_sys::Function>()?;
    let promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into::<js_sys::Promise>()?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// Smooth-scroll to a post's comments and focus the comment box.
pub fn scroll_to_comments(post_id: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(section) = doc.query_selector(&comments_selector(post_id)).ok().flatten() else {
        log::debug!("no comments section for post {post_id}");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
    if let Some(input) = dom::query_first(&section, "input").and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        if let Err(err) = input.focus() {
            log::debug!("focus comment input: {err:?}");
        }
    }
}

/// Same-page links scroll smoothly and stop short of the fixed header.
pub fn install_anchor_scroll() {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href)
                .and_then(|id| dom::by_id::<web_sys::HtmlElement>(id))
            else {
                return;
            };
            ev.prevent_default();
            let Some(win) = dom::window() else {
                return;
            };
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(anchor_scroll_top(f64::from(target.offset_top())));
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

/// Play the `shake` animation once.
pub fn shake_element(el: web_sys::Element) {
    dom::add_class(&el, SHAKE_CLASS);
    dom::after(SHAKE_MS, move || dom::remove_class(&el, SHAKE_CLASS));
}

/// Type `text` into `el` one character every `speed_ms`.
pub fn type_writer(el: web_sys::Element, text: String, speed_ms: u32) {
    dom::set_text(&el, "");
    let total = text.chars().count();
    leptos::task::spawn_local(async move {
        for typed in 1..=total {
            dom::set_text(&el, char_prefix(&text, typed));
            if typed < total {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(speed_ms))).await;
            }
        }
    });
}
