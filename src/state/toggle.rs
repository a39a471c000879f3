//! Like / follow / bookmark button state.
//!
//! DESIGN
//! ======
//! The server is the source of truth. A button only moves to a new state
//! through [`ToggleState::acknowledge`], which refuses anything but a
//! successful acknowledgement, so a failed request can never leave the button
//! claiming a change that did not happen.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::net::types::{LikeStatus, ToggleAck};

/// Which relation a toggle button controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    Like,
    Follow,
    Bookmark,
}

impl ToggleKind {
    /// Class present on the button while the relation is active.
    #[must_use]
    pub fn active_class(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Follow => "following",
            Self::Bookmark => "bookmarked",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Follow => "follow",
            Self::Bookmark => "bookmark",
        }
    }
}

/// Button state as last acknowledged by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub active: bool,
    /// Displayed total; only like buttons carry one.
    pub count: Option<u64>,
}

impl ToggleState {
    #[must_use]
    pub fn from_like_status(status: &LikeStatus) -> Self {
        Self { active: status.liked, count: Some(status.like_count) }
    }

    /// Next state after a toggle request, or `None` when the answer does not
    /// prove the flip happened. Like answers must also carry the new total.
    #[must_use]
    pub fn acknowledge(self, kind: ToggleKind, ack: &ToggleAck) -> Option<Self> {
        if !ack.success {
            return None;
        }
        match kind {
            ToggleKind::Like => ack.like_count.map(|count| Self { active: !self.active, count: Some(count) }),
            ToggleKind::Follow | ToggleKind::Bookmark => Some(Self { active: !self.active, count: self.count }),
        }
    }
}

/// What a button should display for a given state. `None` fields are left
/// as rendered by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleView {
    pub label: Option<&'static str>,
    pub icon_class: Option<&'static str>,
    pub count_text: Option<String>,
    pub background: Option<&'static str>,
    pub border_color: Option<&'static str>,
}

#[must_use]
pub fn view_for(kind: ToggleKind, state: ToggleState) -> ToggleView {
    let count_text = state.count.map(|n| format!("({n})"));
    match kind {
        ToggleKind::Like => ToggleView {
            label: Some(if state.active { "Liked" } else { "Like" }),
            count_text,
            ..ToggleView::default()
        },
        ToggleKind::Follow => ToggleView {
            label: Some(if state.active { "Following" } else { "Follow" }),
            icon_class: Some(if state.active { "fas fa-check" } else { "fas fa-user-plus" }),
            ..ToggleView::default()
        },
        ToggleKind::Bookmark => ToggleView {
            icon_class: Some("fas fa-bookmark"),
            background: Some(if state.active { "rgba(255,107,53,0.15)" } else { "rgba(0,212,255,0.05)" }),
            border_color: Some(if state.active { "rgba(255,107,53,0.3)" } else { "rgba(0,212,255,0.1)" }),
            ..ToggleView::default()
        },
    }
}

/// Read a server-rendered count such as `(12)` or `12 likes`.
#[must_use]
pub fn parse_count_text(text: &str) -> Option<u64> {
    let digits: String = text.chars().skip_while(|c| !c.is_ascii_digit()).take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
