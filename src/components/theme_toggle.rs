//! Light/dark theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme is applied as early as startup allows, then flipped by the
//! `#darkModeToggle` button or the `toggleDarkMode()` global. The manager is
//! kept in a thread-local so both entry points share one state.
//!
//! ERROR HANDLING
//! ==============
//! Without `localStorage` the preference lives in memory for the page's
//! lifetime. A failed server sync is logged at warn level and never reverts
//! the local change.

use std::cell::RefCell;

use crate::config::ThemeConfig;
use crate::net::api;
use crate::state::theme::{DARK_BODY_CLASS, Theme, ThemeManager, is_authenticated, style_for};
use crate::util::dom;
use crate::util::storage::{LocalStorage, MemoryStore, PreferenceStore};

/// `localStorage` when the browser allows it, memory otherwise.
enum BrowserStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(s) => s.get(key),
            Self::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            Self::Local(s) => s.set(key, value),
            Self::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            Self::Local(s) => s.remove(key),
            Self::Memory(s) => s.remove(key),
        }
    }
}

struct ThemeRuntime {
    manager: ThemeManager<BrowserStore>,
    cfg: ThemeConfig,
}

thread_local! {
    static RUNTIME: RefCell<Option<ThemeRuntime>> = const { RefCell::new(None) };
}

/// Load the stored preference, apply it and wire the toggle button.
pub fn install(cfg: &ThemeConfig) {
    let store = LocalStorage::open().map_or_else(
        || {
            log::warn!("localStorage unavailable; theme preference will not persist");
            BrowserStore::Memory(MemoryStore::default())
        },
        BrowserStore::Local,
    );
    let manager = ThemeManager::load(store, &cfg.storage_key, &cfg.legacy_storage_key);
    apply(manager.current(), cfg);
    RUNTIME.with(|rt| *rt.borrow_mut() = Some(ThemeRuntime { manager, cfg: cfg.clone() }));

    // Buttons wired with an inline `onclick="toggleDarkMode()"` already reach
    // `toggle` through the global; listening too would flip twice.
    if let Some(button) = dom::by_id::<web_sys::Element>(&cfg.toggle_id).filter(|b| !b.has_attribute("onclick")) {
        dom::listen(&button, "click", |ev| {
            ev.prevent_default();
            toggle();
        });
    }
}

/// Flip the theme. Returns the new theme, or `None` before [`install`] ran.
pub fn toggle() -> Option<Theme> {
    let (next, sync) = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        let rt = rt.as_mut()?;
        let next = rt.manager.toggle();
        apply(next, &rt.cfg);
        Some((next, rt.cfg.sync_to_server && viewer_is_signed_in(&rt.cfg)))
    })?;
    if sync {
        leptos::task::spawn_local(async {
            if let Err(err) = api::sync_theme().await {
                log::warn!("theme sync failed [{}]: {err}", err.code());
            }
        });
    }
    Some(next)
}

fn viewer_is_signed_in(cfg: &ThemeConfig) -> bool {
    let label = dom::document()
        .and_then(|doc| doc.query_selector(&cfg.user_info_selector).ok().flatten())
        .and_then(|el| el.text_content());
    is_authenticated(label.as_deref(), &cfg.guest_label)
}

/// Reflect `theme` on `<body>`, `<html>` and the toggle button.
pub fn apply(theme: Theme, cfg: &ThemeConfig) {
    let style = style_for(theme);
    let Some(doc) = dom::document() else {
        return;
    };
    if let Some(body) = doc.body() {
        dom::set_class(&body, DARK_BODY_CLASS, style.dark_body_class);
    }
    if let Some(root) = doc.document_element() {
        if let Err(err) = root.set_attribute("data-theme", style.data_theme) {
            log::debug!("data-theme: {err:?}");
        }
    }
    if let Some(button) = doc.get_element_by_id(&cfg.toggle_id) {
        button.set_inner_html(style.toggle_icon_html);
        if let Err(err) = button.set_attribute("title", style.toggle_title) {
            log::debug!("toggle title: {err:?}");
        }
    }
}
