//! Live markdown preview for the post editor.
//!
//! The preview pane's server-rendered content is replaced by a Leptos view
//! bound to a signal; each keystroke in the editor re-renders the source and
//! writes the result into that signal.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::MarkdownConfig;
use crate::util::dom;
use crate::util::markdown::{Preview, render_preview};

pub fn install(cfg: &MarkdownConfig) {
    let (Some(editor), Some(pane)) = (
        dom::by_id::<web_sys::Element>(&cfg.editor_id),
        dom::by_id::<web_sys::HtmlElement>(&cfg.preview_id),
    ) else {
        return;
    };

    let (preview, set_preview) = signal(render_preview(&dom::field_value(&editor)));
    pane.set_inner_html("");
    leptos::mount::mount_to(pane, move || view! { <MarkdownPreview preview /> }).forget();

    let field = editor.clone();
    dom::listen(&editor, "input", move |_| {
        set_preview.set(render_preview(&dom::field_value(&field)));
    });
}

#[component]
fn MarkdownPreview(preview: ReadSignal<Preview>) -> impl IntoView {
    move || match preview.get() {
        Preview::Html(html) => view! { <div class="md-preview-body" inner_html=html></div> }.into_any(),
        Preview::Raw(text) => view! { <pre class="md-preview-raw">{text}</pre> }.into_any(),
    }
}
