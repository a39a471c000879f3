//! Browser tests for the DOM glue.
//!
//! Run with: `wasm-pack test --headless --firefox -- --features csr`
#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use std::time::Duration;

use blog_ui::components::{drop_zone, markdown_preview, nav_highlight, register_form, theme_toggle, toggle_buttons};
use blog_ui::config::{MarkdownConfig, NavConfig, RegisterConfig, ThemeConfig, UploadConfig};
use blog_ui::net::error::ApiError;
use blog_ui::net::types::ToggleAck;
use blog_ui::state::theme::{Theme, ThemeManager};
use blog_ui::state::toggle::ToggleKind;
use blog_ui::util::storage::{LocalStorage, PreferenceStore};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().and_then(|w| w.document()).expect("document")
}

/// Append `html` to `<body>` inside a fresh wrapper and return the wrapper.
fn fixture(html: &str) -> web_sys::Element {
    let doc = document();
    let host = doc.create_element("div").expect("div");
    host.set_inner_html(html);
    doc.body().expect("body").append_child(&host).expect("append");
    host
}

fn element(id: &str) -> web_sys::HtmlElement {
    document().get_element_by_id(id).expect(id).dyn_into().expect("html element")
}

fn cancelable(kind: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    init.set_bubbles(true);
    web_sys::Event::new_with_event_init_dict(kind, &init).expect("event")
}

/// `drop` event carrying one file per `(name, mime)` pair.
fn drop_of(files: &[(&str, &str)]) -> web_sys::DragEvent {
    let transfer = web_sys::DataTransfer::new().expect("data transfer");
    for (name, mime) in files {
        let bag = web_sys::FilePropertyBag::new();
        bag.set_type(mime);
        let parts = js_sys::Array::of1(&"payload".into());
        let file = web_sys::File::new_with_str_sequence_and_options(&parts, name, &bag).expect("file");
        transfer.items().add_with_file(&file).expect("add file");
    }
    let init = web_sys::DragEventInit::new();
    init.set_cancelable(true);
    init.set_bubbles(true);
    init.set_data_transfer(Some(&transfer));
    web_sys::DragEvent::new_with_event_init_dict("drop", &init).expect("drag event")
}

/// Let file reads and reactive updates land.
async fn pause() {
    gloo_timers::future::sleep(Duration::from_millis(100)).await;
}

// === Theme ===

#[wasm_bindgen_test]
fn theme_apply_round_trips_document_state() {
    let host = fixture(r#"<button id="themeToggleT"></button>"#);
    let cfg = ThemeConfig { toggle_id: "themeToggleT".into(), ..ThemeConfig::default() };
    let doc = document();
    let body = doc.body().expect("body");
    let root = doc.document_element().expect("html");
    let button = element("themeToggleT");

    theme_toggle::apply(Theme::Dark, &cfg);
    let dark = (body.class_name(), root.get_attribute("data-theme"), button.title(), button.inner_html());
    assert!(body.class_list().contains("dark-mode"));
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(button.title(), "Toggle light mode");

    theme_toggle::apply(Theme::Light, &cfg);
    assert!(!body.class_list().contains("dark-mode"));
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert!(button.inner_html().contains("fa-moon"));

    theme_toggle::apply(Theme::Dark, &cfg);
    let again = (body.class_name(), root.get_attribute("data-theme"), button.title(), button.inner_html());
    assert_eq!(dark, again);
    host.remove();
}

#[wasm_bindgen_test]
fn legacy_flag_migrates_in_local_storage() {
    let store = LocalStorage::open().expect("localStorage");
    store.remove("themeT");
    store.set("darkModeT", "false");

    let manager = ThemeManager::load(store, "themeT", "darkModeT");
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(manager.store().get("themeT").as_deref(), Some("light"));
    assert_eq!(manager.store().get("darkModeT"), None);
    manager.store().remove("themeT");
}

// === Navigation ===

#[wasm_bindgen_test]
fn nav_marks_only_the_current_link() {
    let here = web_sys::window().expect("window").location().pathname().expect("pathname");
    let host = fixture(&format!(
        r#"<nav class="nav-t"><a id="navHereT" href="{here}">Here</a><a id="navAwayT" href="/nowhere-near-t">Away</a></nav>"#
    ));
    nav_highlight::install(&NavConfig { link_selector: ".nav-t a".into(), ..NavConfig::default() });

    assert!(element("navHereT").class_list().contains("active"));
    assert!(!element("navAwayT").class_list().contains("active"));
    host.remove();
}

// === Registration ===

#[wasm_bindgen_test]
fn short_password_blocks_submit() {
    let host = fixture(
        r#"<form id="formT"><input id="userT"><span id="userHintT"></span>
           <input id="passT" type="password" value="short"><span id="passHintT"></span></form>"#,
    );
    register_form::install(&RegisterConfig {
        form_id: "formT".into(),
        username_id: "userT".into(),
        username_hint_id: "userHintT".into(),
        password_id: "passT".into(),
        password_hint_id: "passHintT".into(),
        ..RegisterConfig::default()
    });

    let submitted = element("formT").dispatch_event(&cancelable("submit")).expect("dispatch");
    assert!(!submitted);
    let hint = element("passHintT");
    assert!(hint.class_list().contains("hint-error"));
    assert_eq!(hint.text_content().as_deref(), Some("Password must be exactly 8 characters."));

    let input: web_sys::HtmlInputElement = element("passT").dyn_into().expect("input");
    input.set_value("12345678");
    assert!(element("formT").dispatch_event(&cancelable("submit")).expect("dispatch"));
    host.remove();
}

#[wasm_bindgen_test]
fn password_gate_holds_without_a_hint_element() {
    let host = fixture(r#"<form id="formBareT"><input id="passBareT" type="password" value="12345"></form>"#);
    register_form::install(&RegisterConfig {
        form_id: "formBareT".into(),
        username_id: "userBareT".into(),
        username_hint_id: "userHintBareT".into(),
        password_id: "passBareT".into(),
        password_hint_id: "passHintBareT".into(),
        ..RegisterConfig::default()
    });

    assert!(!element("formBareT").dispatch_event(&cancelable("submit")).expect("dispatch"));

    let input: web_sys::HtmlInputElement = element("passBareT").dyn_into().expect("input");
    input.set_value("abcdefgh");
    assert!(element("formBareT").dispatch_event(&cancelable("submit")).expect("dispatch"));
    host.remove();
}

// === Markdown ===

#[wasm_bindgen_test]
fn markdown_preview_renders_on_install() {
    let host = fixture(r#"<textarea id="editorT"># Title</textarea><div id="previewT">server</div>"#);
    markdown_preview::install(&MarkdownConfig { editor_id: "editorT".into(), preview_id: "previewT".into() });

    let html = element("previewT").inner_html();
    assert!(html.contains("<h1>Title</h1>"), "{html}");
    assert!(!html.contains("server"));
    host.remove();
}

// === Drop zone ===

#[wasm_bindgen_test]
fn drop_zone_highlights_while_dragging() {
    let host = fixture(r#"<div id="zoneT"><input id="fileT" type="file"></div><div id="thumbT"></div>"#);
    drop_zone::install(&UploadConfig {
        drop_zone_id: "zoneT".into(),
        input_id: "fileT".into(),
        preview_id: "thumbT".into(),
    });
    let zone = element("zoneT");

    let accepted = zone.dispatch_event(&cancelable("dragover")).expect("dispatch");
    assert!(!accepted);
    assert!(!zone.style().get_property_value("background-color").expect("style").is_empty());

    zone.dispatch_event(&cancelable("dragleave")).expect("dispatch");
    assert!(zone.style().get_property_value("background-color").expect("style").is_empty());
    host.remove();
}

fn install_drop_zone(suffix: &str) -> (web_sys::HtmlElement, web_sys::HtmlInputElement, web_sys::HtmlElement) {
    let (zone, input, thumb) = (format!("zone{suffix}"), format!("file{suffix}"), format!("thumb{suffix}"));
    drop_zone::install(&UploadConfig { drop_zone_id: zone.clone(), input_id: input.clone(), preview_id: thumb.clone() });
    (element(&zone), element(&input).dyn_into().expect("input"), element(&thumb))
}

fn has_image(el: &web_sys::HtmlElement) -> bool {
    el.query_selector("img").expect("selector").is_some()
}

#[wasm_bindgen_test]
async fn non_image_drop_sets_input_without_preview() {
    let host = fixture(r#"<div id="zoneTxt"><input id="fileTxt" type="file"></div><div id="thumbTxt"></div>"#);
    let (zone, input, thumb) = install_drop_zone("Txt");

    let accepted = zone.dispatch_event(&drop_of(&[("notes.txt", "text/plain")])).expect("dispatch");
    assert!(!accepted);
    pause().await;

    let files = input.files().expect("file list");
    assert_eq!(files.length(), 1);
    assert_eq!(files.get(0).expect("file").name(), "notes.txt");
    assert!(!has_image(&thumb));
    host.remove();
}

#[wasm_bindgen_test]
async fn empty_drop_keeps_previous_pick_and_thumbnail() {
    let host = fixture(r#"<div id="zoneImg"><input id="fileImg" type="file"></div><div id="thumbImg"></div>"#);
    let (zone, input, thumb) = install_drop_zone("Img");

    zone.dispatch_event(&drop_of(&[("cover.png", "image/png")])).expect("dispatch");
    pause().await;
    assert!(has_image(&thumb), "{}", thumb.inner_html());

    // Dragged text or links arrive with an empty file list.
    zone.dispatch_event(&drop_of(&[])).expect("dispatch");
    pause().await;

    let files = input.files().expect("file list");
    assert_eq!(files.length(), 1);
    assert_eq!(files.get(0).expect("file").name(), "cover.png");
    assert!(has_image(&thumb), "{}", thumb.inner_html());
    host.remove();
}

// === Toggles ===

fn like_button(id: &str) -> web_sys::Element {
    let host = fixture(&format!(
        r#"<button id="{id}" class="like-btn"><i class="fas fa-heart"></i> <span>Like</span> <span class="like-count">(3)</span></button>"#
    ));
    host.first_element_child().expect("button")
}

fn like_label(button: &web_sys::Element) -> (bool, String, String) {
    let text = |selector: &str| {
        button.query_selector(selector).expect("selector").and_then(|el| el.text_content()).unwrap_or_default()
    };
    (button.class_list().contains("liked"), text("span:nth-child(2)"), text(".like-count"))
}

#[wasm_bindgen_test]
fn refused_like_leaves_button_unchanged() {
    let button = like_button("likeRefusedT");
    let before = like_label(&button);
    let current = toggle_buttons::read_state(ToggleKind::Like, &button);
    assert_eq!(current.count, Some(3));

    let refused = ToggleAck { success: false, like_count: Some(4) };
    toggle_buttons::settle(&button, ToggleKind::Like, "7", current, Ok(refused));
    assert_eq!(like_label(&button), before);

    let countless = ToggleAck { success: true, like_count: None };
    toggle_buttons::settle(&button, ToggleKind::Like, "7", current, Ok(countless));
    assert_eq!(like_label(&button), before);

    let failed = Err(ApiError::Status { path: "/api/like/7".into(), status: 500 });
    toggle_buttons::settle(&button, ToggleKind::Like, "7", current, failed);
    assert_eq!(like_label(&button), before);
    button.parent_element().expect("host").remove();
}

#[wasm_bindgen_test]
fn accepted_like_updates_class_label_and_count() {
    let button = like_button("likeAcceptedT");
    let current = toggle_buttons::read_state(ToggleKind::Like, &button);

    let ack = ToggleAck { success: true, like_count: Some(4) };
    toggle_buttons::settle(&button, ToggleKind::Like, "7", current, Ok(ack));
    assert_eq!(like_label(&button), (true, "Liked".to_owned(), "(4)".to_owned()));

    let next = toggle_buttons::read_state(ToggleKind::Like, &button);
    assert!(next.active);
    assert_eq!(next.count, Some(4));
    button.parent_element().expect("host").remove();
}
