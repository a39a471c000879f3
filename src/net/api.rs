//! REST helpers for the blog backend.
//!
//! Path builders are compiled for the browser build and for unit tests; the
//! calls themselves go through `gloo-net` and exist only with the `csr`
//! feature.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A non-2xx status is reported as
//! `Status` before any decoding is attempted.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
#[cfg(any(feature = "csr", test))]
use percent_encoding::{CONTROLS, utf8_percent_encode};

#[cfg(any(feature = "csr", test))]
use crate::state::toggle::ToggleKind;

#[cfg(feature = "csr")]
use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::{LikeStatus, TagCount, TagsResponse, ToggleAck, UsernameCheck};
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

/// Tag frequency listing.
pub const TAGS_PATH: &str = "/api/tags";
/// Server-side theme preference flip.
pub const THEME_SYNC_PATH: &str = "/api/toggle_dark_mode";

#[cfg(any(feature = "csr", test))]
/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Everything but RFC 3986 unreserved characters, like `encodeURIComponent`.
pub(crate) const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[cfg(any(feature = "csr", test))]
fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

#[cfg(any(feature = "csr", test))]
pub(crate) fn check_username_path(username: &str) -> String {
    format!("/check_username?username={}", utf8_percent_encode(username, COMPONENT))
}

#[cfg(any(feature = "csr", test))]
pub(crate) fn like_status_path(post_id: &str) -> String {
    format!("/api/is_liked/{}", segment(post_id))
}

#[cfg(any(feature = "csr", test))]
/// Endpoint a toggle click posts to: the deactivate route when the button is
/// currently active, the activate route otherwise.
pub(crate) fn toggle_path(kind: ToggleKind, target_id: &str, currently_active: bool) -> String {
    let prefix = match (kind, currently_active) {
        (ToggleKind::Like, false) => "/api/like",
        (ToggleKind::Like, true) => "/api/unlike",
        (ToggleKind::Follow, false) => "/follow",
        (ToggleKind::Follow, true) => "/unfollow",
        (ToggleKind::Bookmark, false) => "/api/bookmark",
        (ToggleKind::Bookmark, true) => "/api/unbookmark",
    };
    format!("{prefix}/{}", segment(target_id))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "csr")]
fn transport_error(path: &str, err: &gloo_net::Error) -> ApiError {
    ApiError::Transport { path: path.to_owned(), message: err.to_string() }
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(path: &str, resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { path: path.to_owned(), status: resp.status() });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode { path: path.to_owned(), message: e.to_string() })
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| transport_error(path, &e))?;
    decode(path, resp).await
}

#[cfg(feature = "csr")]
async fn post_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(path)
        .send()
        .await
        .map_err(|e| transport_error(path, &e))?;
    decode(path, resp).await
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Ask whether `username` is already registered.
///
/// # Errors
///
/// Any transport, status or decode failure.
#[cfg(feature = "csr")]
pub async fn check_username(username: &str) -> Result<bool, ApiError> {
    let path = check_username_path(username);
    let check: UsernameCheck = get_json(&path).await?;
    Ok(check.exists)
}

/// Fetch tag frequencies for the cloud.
///
/// # Errors
///
/// Any transport, status or decode failure.
#[cfg(feature = "csr")]
pub async fn fetch_tags() -> Result<Vec<TagCount>, ApiError> {
    let body: TagsResponse = get_json(TAGS_PATH).await?;
    Ok(body.tags)
}

/// Read the viewer's like state for one post.
///
/// # Errors
///
/// Any transport, status or decode failure.
#[cfg(feature = "csr")]
pub async fn fetch_like_status(post_id: &str) -> Result<LikeStatus, ApiError> {
    get_json(&like_status_path(post_id)).await
}

/// Post a like/follow/bookmark toggle. The acknowledgement is returned as-is;
/// deciding whether it counts as success is the caller's job.
///
/// # Errors
///
/// Any transport, status or decode failure.
#[cfg(feature = "csr")]
pub async fn send_toggle(kind: ToggleKind, target_id: &str, currently_active: bool) -> Result<ToggleAck, ApiError> {
    post_json(&toggle_path(kind, target_id, currently_active)).await
}

/// Push a theme flip to the server for signed-in viewers.
///
/// # Errors
///
/// Transport failure or a non-2xx status. The body is ignored.
#[cfg(feature = "csr")]
pub async fn sync_theme() -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(THEME_SYNC_PATH)
        .send()
        .await
        .map_err(|e| transport_error(THEME_SYNC_PATH, &e))?;
    if !resp.ok() {
        return Err(ApiError::Status { path: THEME_SYNC_PATH.to_owned(), status: resp.status() });
    }
    Ok(())
}
