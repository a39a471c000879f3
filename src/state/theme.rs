//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! Two states, flipped only by an explicit toggle. The preference lives under
//! a single storage key (`"light"`/`"dark"`). An older boolean key is only
//! consulted when the new key is missing or unreadable, and is deleted on
//! every load that finds it, so the two schemes never coexist after first
//! load.
//!
//! TRADE-OFFS
//! ==========
//! Server sync is decided here ([`is_authenticated`]) but performed by the
//! caller and never rolls the local choice back.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Read the legacy `"true"`/`"false"` dark-mode flag.
    #[must_use]
    pub fn from_legacy_flag(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Document-level values that express a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Whether `<body>` carries [`DARK_BODY_CLASS`].
    pub dark_body_class: bool,
    /// Value of `data-theme` on `<html>`.
    pub data_theme: &'static str,
    /// Icon markup for the toggle control.
    pub toggle_icon_html: &'static str,
    pub toggle_title: &'static str,
}

pub const DARK_BODY_CLASS: &str = "dark-mode";

#[must_use]
pub fn style_for(theme: Theme) -> ThemeStyle {
    match theme {
        Theme::Dark => ThemeStyle {
            dark_body_class: true,
            data_theme: "dark",
            toggle_icon_html: r#"<i class="fas fa-sun"></i>"#,
            toggle_title: "Toggle light mode",
        },
        Theme::Light => ThemeStyle {
            dark_body_class: false,
            data_theme: "light",
            toggle_icon_html: r#"<i class="fas fa-moon"></i>"#,
            toggle_title: "Toggle dark mode",
        },
    }
}

/// Guess whether the viewer is signed in from the account label in the
/// header. A missing label counts as a guest.
#[must_use]
pub fn is_authenticated(account_label: Option<&str>, guest_label: &str) -> bool {
    account_label.is_some_and(|label| label.trim() != guest_label)
}

/// Theme state machine backed by a preference store.
pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Load the persisted theme, migrating `legacy_key` when `key` is unset
    /// or unreadable. `legacy_key` is deleted whenever it is present.
    /// No theme is written when neither key holds a usable value.
    pub fn load(store: S, key: &str, legacy_key: &str) -> Self {
        let legacy = store.get(legacy_key);
        if legacy.is_some() {
            store.remove(legacy_key);
        }
        let current = if let Some(theme) = store.get(key).as_deref().and_then(Theme::parse) {
            theme
        } else if let Some(theme) = legacy.as_deref().and_then(Theme::from_legacy_flag) {
            store.set(key, theme.as_str());
            theme
        } else {
            Theme::default()
        };
        Self { store, key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip and persist; returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
