//! Active navigation link matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether a nav link pointing at `link_path` should be highlighted while the
/// browser is on `current_path`.
///
/// The home page matches `/` and `/index`. Elsewhere a link matches its own
/// path and every page below it (`/messages` covers `/messages/12`), but not
/// siblings that merely share a prefix (`/messages-archive`).
#[must_use]
pub fn is_active_link(current_path: &str, link_path: &str) -> bool {
    if current_path == "/" {
        return link_path == "/" || link_path == "/index";
    }
    if link_path == current_path {
        return true;
    }
    let base = link_path.trim_end_matches('/');
    if base.is_empty() {
        return false;
    }
    current_path
        .strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Selector for the comments block of one post.
#[must_use]
pub fn comments_selector(post_id: &str) -> String {
    let escaped = post_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[data-post-id=\"{escaped}\"] .comments-section")
}

/// Element id an in-page link such as `#comments` points at. A bare `#`
/// points nowhere.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
