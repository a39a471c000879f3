//! Page configuration for the enhancement layer.
//!
//! DESIGN
//! ======
//! Templates may embed `<script type="application/json" id="blog-ui-config">`
//! with any subset of these fields; everything missing keeps its default, so
//! a page with no config block behaves exactly like the stock templates.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional JSON config block in the page.
pub const CONFIG_ELEMENT_ID: &str = "blog-ui-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// `log` level name for the console logger (`error`..`trace`).
    pub log_level: String,
    pub nav: NavConfig,
    pub register: RegisterConfig,
    pub markdown: MarkdownConfig,
    pub upload: UploadConfig,
    pub tag_cloud: TagCloudConfig,
    pub toggles: ToggleConfig,
    pub theme: ThemeConfig,
    pub effects: EffectsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            nav: NavConfig::default(),
            register: RegisterConfig::default(),
            markdown: MarkdownConfig::default(),
            upload: UploadConfig::default(),
            tag_cloud: TagCloudConfig::default(),
            toggles: ToggleConfig::default(),
            theme: ThemeConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub link_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { link_selector: ".glass-nav a".to_owned(), active_class: "active".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterConfig {
    pub form_id: String,
    pub username_id: String,
    pub username_hint_id: String,
    pub password_id: String,
    pub password_hint_id: String,
    /// Quiet period before a username lookup fires.
    pub debounce_ms: u32,
    /// Exact password length the registration form accepts.
    pub password_length: usize,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            form_id: "registerForm".to_owned(),
            username_id: "regUsername".to_owned(),
            username_hint_id: "usernameHint".to_owned(),
            password_id: "regPassword".to_owned(),
            password_hint_id: "passwordHint".to_owned(),
            debounce_ms: 400,
            password_length: crate::state::register::REQUIRED_PASSWORD_LENGTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownConfig {
    pub editor_id: String,
    pub preview_id: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { editor_id: "contentEditor".to_owned(), preview_id: "mdPreview".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadConfig {
    pub drop_zone_id: String,
    pub input_id: String,
    pub preview_id: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            drop_zone_id: "dropZone".to_owned(),
            input_id: "image".to_owned(),
            preview_id: "imagePreview".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagCloudConfig {
    pub container_id: String,
    pub font_min_px: f64,
    pub font_max_px: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

impl Default for TagCloudConfig {
    fn default() -> Self {
        Self {
            container_id: "tagCloud".to_owned(),
            font_min_px: 12.0,
            font_max_px: 26.0,
            opacity_min: 0.6,
            opacity_max: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleConfig {
    /// Like buttons whose state is fetched on load.
    pub like_selector: String,
    /// Attribute carrying the post id on like buttons.
    pub like_id_attribute: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self { like_selector: ".btn-like[data-post-id]".to_owned(), like_id_attribute: "data-post-id".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Older boolean key, migrated into `storage_key` when found.
    pub legacy_storage_key: String,
    pub toggle_id: String,
    pub user_info_selector: String,
    pub guest_label: String,
    /// Whether authenticated viewers also push the toggle to the server.
    pub sync_to_server: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            legacy_storage_key: "darkMode".to_owned(),
            toggle_id: "darkModeToggle".to_owned(),
            user_info_selector: ".user-info span".to_owned(),
            guest_label: "Guest".to_owned(),
            sync_to_server: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct EffectsConfig {
    pub scroll_reveal: bool,
    pub counters: bool,
    pub particles: bool,
    pub ripple: bool,
    pub parallax: bool,
    pub progress_bar: bool,
    pub lazy_images: bool,
    pub anchor_scroll: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            scroll_reveal: true,
            counters: true,
            particles: true,
            ripple: true,
            parallax: true,
            progress_bar: true,
            lazy_images: true,
            anchor_scroll: true,
        }
    }
}

/// Parse a page config block. Blank input yields the defaults.
///
/// # Errors
///
/// Returns the `serde_json` error when the block is not a valid config object.
pub fn parse(raw: &str) -> Result<Config, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_json::from_str(raw)
}
