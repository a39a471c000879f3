//! Response DTOs for the blog's JSON endpoints.
//!
//! DESIGN
//! ======
//! Only the fields the UI reads are modelled. Missing flags default to
//! `false` so a body without `success` is treated as an unsuccessful answer
//! rather than a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// `GET /check_username` answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UsernameCheck {
    /// Whether an account with this name already exists.
    #[serde(default)]
    pub exists: bool,
}

/// One tag with how many posts carry it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

/// `GET /api/tags` answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub tags: Vec<TagCount>,
}

/// Acknowledgement from any like/follow/bookmark toggle endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ToggleAck {
    #[serde(default)]
    pub success: bool,
    /// Updated like total; only the like endpoints send it.
    #[serde(default)]
    pub like_count: Option<u64>,
}

/// `GET /api/is_liked/{id}` answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LikeStatus {
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub like_count: u64,
}
