//! Arithmetic behind the decorative effects: counter easing, parallax,
//! scroll progress, ripple placement and anchor offsets.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Counter animation length.
pub const COUNTER_DURATION_MS: f64 = 1500.0;
/// Fixed header height subtracted from in-page anchor targets.
pub const ANCHOR_OFFSET_PX: f64 = 100.0;
/// Ripple lifetime before the span is removed.
pub const RIPPLE_LIFETIME_MS: u32 = 600;
/// Maximum parallax travel either side of center.
const PARALLAX_TRAVEL_PX: f64 = 20.0;

#[must_use]
pub fn ease_out_quad(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    p * (2.0 - p)
}

/// One frame of a count-up animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// Value to display `elapsed_ms` into a `start → end` count. The final frame
/// is always exactly `end`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn counter_frame(start: i64, end: i64, elapsed_ms: f64, duration_ms: f64) -> CounterFrame {
    let progress = if duration_ms <= 0.0 { 1.0 } else { (elapsed_ms / duration_ms).clamp(0.0, 1.0) };
    if progress >= 1.0 {
        return CounterFrame { value: end, done: true };
    }
    let eased = ease_out_quad(progress);
    let value = (start as f64 + (end - start) as f64 * eased).floor() as i64;
    CounterFrame { value, done: false }
}

/// Vertical parallax shift for an image whose box spans `top..bottom` in a
/// viewport `viewport_height` tall, or `None` while it is off screen.
#[must_use]
pub fn parallax_offset(viewport_height: f64, top: f64, bottom: f64) -> Option<f64> {
    if top >= viewport_height || bottom <= 0.0 {
        return None;
    }
    let height = bottom - top;
    let span = viewport_height + height;
    if span <= 0.0 {
        return None;
    }
    let scrolled = (viewport_height - top) / span;
    Some((scrolled - 0.5) * PARALLAX_TRAVEL_PX)
}

#[must_use]
pub fn parallax_transform(offset_px: f64) -> String {
    format!("scale(1.1) translateY({offset_px:.2}px)")
}

/// Page scroll progress in percent, clamped to `0..=100`. Pages that fit in
/// the viewport report 0.
#[must_use]
pub fn scroll_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Square ripple centered on the pointer, sized to the larger button side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

#[must_use]
pub fn ripple_at(rect_left: f64, rect_top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Ripple {
    let size = width.max(height);
    Ripple { size, left: client_x - rect_left - size / 2.0, top: client_y - rect_top - size / 2.0 }
}

/// Scroll position that leaves an anchor target just below the fixed header.
#[must_use]
pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    (target_offset_top - ANCHOR_OFFSET_PX).max(0.0)
}

/// First `count` characters of `text`.
#[must_use]
pub fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
