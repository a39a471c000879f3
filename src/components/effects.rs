//! Decorative effects: scroll reveal, count-up stats, lazy images, button
//! ripples, parallax, the scroll progress bar and a few hover/focus touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! None of these carry state the server cares about. Each one is switched by
//! [`EffectsConfig`] and silently skipped when its elements are missing or
//! the browser lacks the API it needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::EffectsConfig;
use crate::util::dom;
use crate::util::motion::{
    COUNTER_DURATION_MS, RIPPLE_LIFETIME_MS, counter_frame, parallax_offset, parallax_transform, ripple_at,
    scroll_percent,
};

const REVEAL_SELECTOR: &str = ".blog-post, .sidebar-card, .welcome-banner";
const RIPPLE_SELECTOR: &str = ".btn-primary, .btn-secondary, .btn-like, .post-action-btn";
const AVATAR_SELECTOR: &str = r#"img[src*="gravatar"], img[src*="avatar"]"#;
const SHAKE_STYLE_ID: &str = "shake-styles";
const SHAKE_CSS: &str = "@keyframes shake {\
 0%, 100% { transform: translateX(0); }\
 10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }\
 20%, 40%, 60%, 80% { transform: translateX(5px); }\
 }\
 .shake { animation: shake 0.5s; }";

pub fn install(cfg: &EffectsConfig) {
    if cfg.scroll_reveal {
        install_scroll_reveal();
    }
    if cfg.counters {
        install_counters();
    }
    if cfg.lazy_images {
        install_lazy_images();
    }
    if cfg.ripple {
        install_ripple();
    }
    if cfg.parallax || cfg.progress_bar {
        install_scroll_effects(cfg.parallax, cfg.progress_bar);
    }
    install_avatar_float();
    install_comment_focus();
    install_shake_styles();
}

// =============================================================================
// INTERSECTION
// =============================================================================

/// Call `on_visible` once per target the first time it scrolls into view.
fn observe_once(targets: Vec<web_sys::Element>, init: &web_sys::IntersectionObserverInit, on_visible: impl Fn(&web_sys::Element) + 'static) {
    if targets.is_empty() {
        return;
    }
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(&target);
            }
        },
    );
    let observer = match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), init) {
        Ok(observer) => observer,
        Err(err) => {
            log::debug!("IntersectionObserver unavailable: {err:?}");
            return;
        }
    };
    cb.forget();
    for target in &targets {
        observer.observe(target);
    }
}

fn threshold(value: f64) -> web_sys::IntersectionObserverInit {
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(value));
    init
}

fn install_scroll_reveal() {
    let targets: Vec<_> = dom::query_all(REVEAL_SELECTOR)
        .into_iter()
        .filter(|el| !el.class_list().contains("scroll-revealed"))
        .collect();
    for el in &targets {
        dom::add_class(el, "scroll-reveal");
    }
    let init = threshold(0.1);
    init.set_root_margin("0px 0px -100px 0px");
    observe_once(targets, &init, |el| dom::add_class(el, "revealed"));
}

fn install_counters() {
    observe_once(dom::query_all("[data-count]"), &threshold(0.5), |el| {
        let end = el.get_attribute("data-count").and_then(|raw| raw.trim().parse::<i64>().ok());
        match end {
            Some(end) => animate_counter(el.clone(), 0, end, COUNTER_DURATION_MS),
            None => log::debug!("ignoring non-numeric data-count"),
        }
    });
}

/// Count `el`'s text from `start` to `end` over `duration_ms`.
pub fn animate_counter(el: web_sys::Element, start: i64, end: i64, duration_ms: f64) {
    let started = dom::now_ms();
    dom::frame_loop(move |now| {
        let frame = counter_frame(start, end, now - started, duration_ms);
        dom::set_text(&el, &frame.value.to_string());
        !frame.done
    });
}

fn install_lazy_images() {
    let images: Vec<_> = dom::query_all("img[data-src]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web_sys::HtmlImageElement>().ok())
        .collect();
    for img in &images {
        dom::set_style(img, "opacity", "0");
        dom::set_style(img, "transition", "opacity 0.6s ease");
    }
    let targets = images.into_iter().map(Into::into).collect();
    observe_once(targets, &web_sys::IntersectionObserverInit::new(), |el| {
        let Some(img) = el.dyn_ref::<web_sys::HtmlImageElement>() else {
            return;
        };
        let Some(src) = img.get_attribute("data-src") else {
            return;
        };
        let loaded = img.clone();
        dom::listen(img, "load", move |_| dom::set_style(&loaded, "opacity", "1"));
        img.set_src(&src);
    });
}

// =============================================================================
// POINTER AND SCROLL
// =============================================================================

fn install_ripple() {
    let Some(doc) = dom::document() else {
        return;
    };
    for button in dom::query_all(RIPPLE_SELECTOR) {
        let host = button.clone();
        let doc = doc.clone();
        dom::listen(&button, "click", move |ev| {
            let Some(mouse) = ev.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let Some(span) = doc.create_element("span").ok().and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) else {
                return;
            };
            let rect = host.get_bounding_client_rect();
            let ripple = ripple_at(
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                f64::from(mouse.client_x()),
                f64::from(mouse.client_y()),
            );
            let size = format!("{}px", ripple.size);
            dom::set_style(&span, "width", &size);
            dom::set_style(&span, "height", &size);
            dom::set_style(&span, "left", &format!("{}px", ripple.left));
            dom::set_style(&span, "top", &format!("{}px", ripple.top));
            dom::add_class(&span, "ripple-effect");
            if host.append_child(&span).is_ok() {
                dom::after(RIPPLE_LIFETIME_MS, move || span.remove());
            }
        });
    }
}

fn install_scroll_effects(parallax: bool, progress: bool) {
    let (Some(win), Some(doc)) = (dom::window(), dom::document()) else {
        return;
    };
    let images: Vec<_> = if parallax {
        dom::query_all(".post-image img")
            .into_iter()
            .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .collect()
    } else {
        Vec::new()
    };
    let bar = if progress { progress_bar(&doc) } else { None };
    if images.is_empty() && bar.is_none() {
        return;
    }

    let view = win.clone();
    dom::listen(&win, "scroll", move |_| {
        let viewport = view.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();
        for img in &images {
            let rect = img.get_bounding_client_rect();
            if let Some(offset) = parallax_offset(viewport, rect.top(), rect.bottom()) {
                dom::set_style(img, "transform", &parallax_transform(offset));
            }
        }
        if let (Some(bar), Some(root)) = (bar.as_ref(), doc.document_element()) {
            let scroll_top = view.scroll_y().unwrap_or_default();
            let percent = scroll_percent(scroll_top, f64::from(root.scroll_height()), viewport);
            dom::set_style(bar, "width", &format!("{percent}%"));
        }
    });
}

fn progress_bar(doc: &web_sys::Document) -> Option<web_sys::HtmlElement> {
    let bar = doc.create_element("div").ok()?.dyn_into::<web_sys::HtmlElement>().ok()?;
    for (property, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("height", "3px"),
        ("background", "linear-gradient(90deg, var(--primary), var(--accent-warm))"),
        ("z-index", "3000"),
        ("transition", "width 0.1s ease"),
        ("width", "0%"),
    ] {
        dom::set_style(&bar, property, value);
    }
    doc.body()?.append_child(&bar).ok()?;
    Some(bar)
}

// =============================================================================
// TOUCHES
// =============================================================================

fn install_avatar_float() {
    for avatar in dom::query_all(AVATAR_SELECTOR) {
        let el = avatar.clone();
        dom::listen(&avatar, "mouseenter", move |_| dom::add_class(&el, "floating-element"));
        let el = avatar.clone();
        dom::listen(&avatar, "mouseleave", move |_| dom::remove_class(&el, "floating-element"));
    }
}

fn install_comment_focus() {
    for form in dom::query_all(".comment-form") {
        let (Some(input), Ok(form)) = (dom::query_first(&form, "input"), form.dyn_into::<web_sys::HtmlElement>()) else {
            continue;
        };
        let target = form.clone();
        dom::listen(&input, "focus", move |_| {
            dom::set_style(&target, "transform", "scale(1.02)");
            dom::set_style(&target, "transition", "transform 0.3s ease");
        });
        dom::listen(&input, "blur", move |_| dom::set_style(&form, "transform", "scale(1)"));
    }
}

fn install_shake_styles() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.get_element_by_id(SHAKE_STYLE_ID).is_some() {
        return;
    }
    let Some(style) = doc.create_element("style").ok() else {
        return;
    };
    style.set_id(SHAKE_STYLE_ID);
    style.set_text_content(Some(SHAKE_CSS));
    if let Some(head) = doc.head() {
        if let Err(err) = head.append_child(&style) {
            log::debug!("shake styles: {err:?}");
        }
    }
}
