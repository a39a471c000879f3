//! Tag cloud layout: maps tag frequencies onto font size and opacity.

#[cfg(test)]
#[path = "tag_cloud_test.rs"]
mod tag_cloud_test;

use percent_encoding::utf8_percent_encode;

use crate::net::api::COMPONENT;
use crate::net::types::TagCount;

/// Shown instead of the cloud when the tags cannot be fetched or are empty.
pub const FALLBACK_TEXT: &str = "Could not load tags";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    /// Linear interpolation; `ratio` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, ratio: f64) -> f64 {
        self.min + (self.max - self.min) * ratio.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TagLink {
    pub name: String,
    pub href: String,
    pub font_size_px: f64,
    pub opacity: f64,
}

impl TagLink {
    #[must_use]
    pub fn label(&self) -> String {
        format!("#{}", self.name)
    }
}

#[must_use]
pub fn tag_href(name: &str) -> String {
    format!("/tag/{}", utf8_percent_encode(name, COMPONENT))
}

/// One link per tag, sized relative to the most frequent tag. Order is kept.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn layout(tags: &[TagCount], font: ScaleRange, opacity: ScaleRange) -> Vec<TagLink> {
    let max_count = tags.iter().map(|t| t.count).max().unwrap_or(0);
    tags.iter()
        .map(|tag| {
            let ratio = if max_count == 0 { 0.0 } else { tag.count as f64 / max_count as f64 };
            TagLink {
                name: tag.name.clone(),
                href: tag_href(&tag.name),
                font_size_px: font.lerp(ratio),
                opacity: opacity.lerp(ratio),
            }
        })
        .collect()
}
