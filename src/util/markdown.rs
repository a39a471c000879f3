//! Markdown preview rendering.
//!
//! ERROR HANDLING
//! ==============
//! The preview must never go blank while the editor has text. A renderer
//! panic, or HTML that comes out empty for non-blank input (a document made
//! only of link reference definitions, for example), falls back to showing
//! the raw source. On `wasm32` panics abort, so only the empty-output check
//! applies there.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::panic::{AssertUnwindSafe, catch_unwind};

use pulldown_cmark::{Options, Parser, html::push_html};

/// What the preview pane should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    /// Rendered HTML, inserted as markup.
    Html(String),
    /// Source text, inserted as plain text.
    Raw(String),
}

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

#[must_use]
pub fn render_html(source: &str) -> String {
    let mut html = String::with_capacity(source.len() * 3 / 2);
    push_html(&mut html, Parser::new_ext(source, options()));
    html
}

#[must_use]
pub fn render_preview(source: &str) -> Preview {
    match catch_unwind(AssertUnwindSafe(|| render_html(source))) {
        Ok(html) if !html.trim().is_empty() || source.trim().is_empty() => Preview::Html(html),
        _ => Preview::Raw(source.to_owned()),
    }
}
