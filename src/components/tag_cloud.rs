//! Sidebar tag cloud.
//!
//! Fetched once per page load; a failed fetch or an empty listing shows
//! [`FALLBACK_TEXT`] instead of an empty box. No retry.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::TagCloudConfig;
use crate::net::api;
use crate::util::dom;
use crate::util::tag_cloud::{FALLBACK_TEXT, ScaleRange, TagLink, layout};

pub fn install(cfg: &TagCloudConfig) {
    let Some(container) = dom::by_id::<web_sys::HtmlElement>(&cfg.container_id) else {
        return;
    };
    let font = ScaleRange { min: cfg.font_min_px, max: cfg.font_max_px };
    let opacity = ScaleRange { min: cfg.opacity_min, max: cfg.opacity_max };

    leptos::task::spawn_local(async move {
        let links = match api::fetch_tags().await {
            Ok(tags) => layout(&tags, font, opacity),
            Err(err) => {
                log::warn!("tag cloud unavailable [{}]: {err}", err.code());
                Vec::new()
            }
        };
        container.set_inner_html("");
        leptos::mount::mount_to(container, move || view! { <TagCloud links /> }).forget();
    });
}

#[component]
fn TagCloud(links: Vec<TagLink>) -> impl IntoView {
    if links.is_empty() {
        return view! { <span class="tag-cloud__empty">{FALLBACK_TEXT}</span> }.into_any();
    }
    links.into_iter().map(|link| view! { <TagCloudLink link /> }).collect_view().into_any()
}

/// One tag; full opacity while hovered.
#[component]
fn TagCloudLink(link: TagLink) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let label = link.label();
    let size = link.font_size_px;
    let resting = link.opacity;
    let style = move || {
        let opacity = if hovered.get() { 1.0 } else { resting };
        format!("font-size:{size:.1}px;opacity:{opacity:.2};margin:4px;display:inline-block;")
    };

    view! {
        <a
            class="tag-cloud__link"
            href=link.href
            style=style
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {label}
        </a>
    }
}
