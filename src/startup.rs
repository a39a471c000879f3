//! WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle loads as a module script after the page is parsed. Startup
//! initialises logging, reads the optional page config block, installs every
//! enhancement and exposes the functions the templates call from inline
//! handlers (`onclick="toggleLike(this, 12)"` and friends).

use wasm_bindgen::prelude::*;

use crate::components::{
    drop_zone, effects, markdown_preview, nav_highlight, page_actions, particle_canvas, register_form, tag_cloud,
    theme_toggle, toggle_buttons,
};
use crate::config::{self, CONFIG_ELEMENT_ID, Config};
use crate::state::toggle::ToggleKind;
use crate::util::dom;
use crate::util::motion::COUNTER_DURATION_MS;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, config_error) = match read_config() {
        Ok(cfg) => (cfg, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&cfg.log_level);
    if let Some(err) = config_error {
        log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
    }

    theme_toggle::install(&cfg.theme);
    nav_highlight::install(&cfg.nav);
    register_form::install(&cfg.register);
    markdown_preview::install(&cfg.markdown);
    drop_zone::install(&cfg.upload);
    tag_cloud::install(&cfg.tag_cloud);
    toggle_buttons::install(&cfg.toggles);
    effects::install(&cfg.effects);
    if cfg.effects.particles {
        particle_canvas::install();
    }
    if cfg.effects.anchor_scroll {
        page_actions::install_anchor_scroll();
    }
    install_globals();

    log::info!("blog-ui ready");
}

fn read_config() -> Result<Config, serde_json::Error> {
    match dom::by_id::<web_sys::Element>(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => config::parse(&raw),
        None => Ok(Config::default()),
    }
}

fn init_logging(level: &str) {
    let filter = level.parse::<log::LevelFilter>().unwrap_or(log::LevelFilter::Info);
    if console_log::init_with_level(log::Level::Trace).is_err() {
        return;
    }
    log::set_max_level(filter);
}

// =============================================================================
// WINDOW GLOBALS
// =============================================================================

fn expose(win: &web_sys::Window, name: &str, f: JsValue) {
    if let Err(err) = js_sys::Reflect::set(win, &JsValue::from_str(name), &f) {
        log::warn!("could not expose {name}: {err:?}");
    }
}

fn element_arg(name: &str, value: JsValue) -> Option<web_sys::Element> {
    let el = value.dyn_into::<web_sys::Element>().ok();
    if el.is_none() {
        log::warn!("{name} called without an element");
    }
    el
}

fn forward_toggle(kind: ToggleKind, button: JsValue, id: &JsValue) {
    let Some(button) = element_arg(kind.name(), button) else {
        return;
    };
    match toggle_buttons::target_id_from_js(id) {
        Some(id) => toggle_buttons::toggle(kind, button, id),
        None => log::warn!("{} called without a target id", kind.name()),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn int_arg(value: &JsValue) -> Option<i64> {
    value.as_f64().filter(|n| n.is_finite()).map(|n| n as i64)
}

fn install_globals() {
    let Some(win) = dom::window() else {
        return;
    };

    for (name, kind) in [
        ("toggleLike", ToggleKind::Like),
        ("toggleFollow", ToggleKind::Follow),
        ("toggleBookmark", ToggleKind::Bookmark),
    ] {
        let f = Closure::<dyn Fn(JsValue, JsValue)>::new(move |button, id: JsValue| forward_toggle(kind, button, &id));
        expose(&win, name, f.into_js_value());
    }

    let f = Closure::<dyn Fn()>::new(|| {
        theme_toggle::toggle();
    });
    expose(&win, "toggleDarkMode", f.into_js_value());

    let f = Closure::<dyn Fn(JsValue)>::new(|url: JsValue| match url.as_string() {
        Some(url) => page_actions::copy_post_link(&url),
        None => log::warn!("copyPostLink called without a url"),
    });
    expose(&win, "copyPostLink", f.into_js_value());

    let f = Closure::<dyn Fn(JsValue)>::new(|id: JsValue| {
        if let Some(id) = toggle_buttons::target_id_from_js(&id) {
            page_actions::scroll_to_comments(&id);
        }
    });
    expose(&win, "scrollToComments", f.into_js_value());

    let f = Closure::<dyn Fn(JsValue)>::new(|el: JsValue| {
        if let Some(el) = element_arg("shakeElement", el) {
            page_actions::shake_element(el);
        }
    });
    expose(&win, "shakeElement", f.into_js_value());

    let f = Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(|el: JsValue, text: JsValue, speed: JsValue| {
        let Some(el) = element_arg("typeWriter", el) else {
            return;
        };
        let speed = int_arg(&speed)
            .and_then(|ms| u32::try_from(ms).ok())
            .unwrap_or(page_actions::TYPEWRITER_SPEED_MS);
        page_actions::type_writer(el, text.as_string().unwrap_or_default(), speed);
    });
    expose(&win, "typeWriter", f.into_js_value());

    let f = Closure::<dyn Fn(JsValue, JsValue, JsValue, JsValue)>::new(
        |el: JsValue, start: JsValue, end: JsValue, duration: JsValue| {
            let Some(el) = element_arg("animateCounter", el) else {
                return;
            };
            let (Some(start), Some(end)) = (int_arg(&start), int_arg(&end)) else {
                log::warn!("animateCounter needs numeric bounds");
                return;
            };
            let duration = duration.as_f64().unwrap_or(COUNTER_DURATION_MS);
            effects::animate_counter(el, start, end, duration);
        },
    );
    expose(&win, "animateCounter", f.into_js_value());
}
