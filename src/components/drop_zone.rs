//! Drag-and-drop image picker with thumbnail preview.
//!
//! DESIGN
//! ======
//! The `<input type="file">` stays the single source of truth for the form:
//! dropped files are assigned to it so a normal submit carries them. Only the
//! first file is previewed, and only when its MIME type is `image/*`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::UploadConfig;
use crate::util::dom;
use crate::util::upload::{DropHighlight, FileSummary};

/// Thumbnail shown under the drop zone.
#[derive(Clone, Debug, PartialEq)]
struct ImagePreview {
    src: String,
    caption: String,
}

pub fn install(cfg: &UploadConfig) {
    let (Some(zone), Some(input)) = (
        dom::by_id::<web_sys::HtmlElement>(&cfg.drop_zone_id),
        dom::by_id::<web_sys::HtmlInputElement>(&cfg.input_id),
    ) else {
        return;
    };

    let (preview, set_preview) = signal(None::<ImagePreview>);
    if let Some(host) = dom::by_id::<web_sys::HtmlElement>(&cfg.preview_id) {
        host.set_inner_html("");
        leptos::mount::mount_to(host, move || view! { <ImagePreviewCard preview /> }).forget();
    }

    highlight(&zone, DropHighlight::Idle);

    let target = zone.clone();
    dom::listen(&zone, "dragover", move |ev| {
        ev.prevent_default();
        highlight(&target, DropHighlight::Hover);
    });

    let target = zone.clone();
    dom::listen(&zone, "dragleave", move |_| highlight(&target, DropHighlight::Idle));

    let target = zone.clone();
    let field = input.clone();
    dom::listen(&zone, "drop", move |ev| {
        ev.prevent_default();
        highlight(&target, DropHighlight::Idle);
        let Some(files) = ev.dyn_ref::<web_sys::DragEvent>().and_then(web_sys::DragEvent::data_transfer).and_then(|dt| dt.files())
        else {
            return;
        };
        // Text and link drags carry an empty list; keep the current pick.
        if files.length() == 0 {
            return;
        }
        field.set_files(Some(&files));
        show_first(&files, set_preview);
    });

    let field = input.clone();
    dom::listen(&zone, "click", move |ev| {
        // Clicks forwarded to the input bubble back up here.
        let from_input = ev.target().is_some_and(|t| t.dyn_ref::<web_sys::HtmlInputElement>().is_some());
        if !from_input {
            field.click();
        }
    });

    let field = input.clone();
    dom::listen(&input, "change", move |_| {
        if let Some(files) = field.files() {
            show_first(&files, set_preview);
        }
    });
}

fn highlight(zone: &web_sys::HtmlElement, state: DropHighlight) {
    dom::set_style(zone, "background", state.background());
    dom::set_style(zone, "border-color", state.border_color());
}

fn show_first(files: &web_sys::FileList, set_preview: WriteSignal<Option<ImagePreview>>) {
    let Some(file) = files.get(0) else {
        set_preview.set(None);
        return;
    };
    let summary = FileSummary { name: file.name(), size_bytes: file.size(), mime: file.type_() };
    if !summary.is_previewable() {
        set_preview.set(None);
        return;
    }
    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            log::warn!("FileReader unavailable: {err:?}");
            return;
        }
    };
    let done = reader.clone();
    let caption = summary.caption();
    let onload = wasm_bindgen::closure::Closure::once_into_js(move |_: web_sys::Event| {
        let Some(src) = done.result().ok().and_then(|v| v.as_string()) else {
            log::warn!("could not read {caption} as a data URL");
            return;
        };
        set_preview.set(Some(ImagePreview { src, caption }));
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(err) = reader.read_as_data_url(&file) {
        log::warn!("reading {} failed: {err:?}", summary.name);
    }
}

#[component]
fn ImagePreviewCard(preview: ReadSignal<Option<ImagePreview>>) -> impl IntoView {
    move || {
        preview.get().map(|p| {
            view! {
                <figure class="image-preview">
                    <img src=p.src alt=p.caption.clone() class="image-preview__thumb" />
                    <figcaption class="image-preview__caption">{p.caption}</figcaption>
                </figure>
            }
        })
    }
}
