use super::*;

fn file(name: &str, size_bytes: f64, mime: &str) -> FileSummary {
    FileSummary { name: name.to_owned(), size_bytes, mime: mime.to_owned() }
}

#[test]
fn only_image_mime_types_are_previewable() {
    assert!(file("a.png", 10.0, "image/png").is_previewable());
    assert!(file("a.svg", 10.0, "image/svg+xml").is_previewable());
    assert!(!file("a.pdf", 10.0, "application/pdf").is_previewable());
    assert!(!file("unknown", 10.0, "").is_previewable());
}

#[test]
fn caption_shows_kilobytes_with_one_decimal() {
    assert_eq!(file("photo.jpg", 12_595.2, "image/jpeg").caption(), "photo.jpg (12.3KB)");
    assert_eq!(file("tiny.gif", 0.0, "image/gif").caption(), "tiny.gif (0.0KB)");
}

#[test]
fn highlight_resets_to_idle_palette() {
    assert_eq!(DropHighlight::Hover.background(), "rgba(0,212,255,0.08)");
    assert_eq!(DropHighlight::Hover.border_color(), "rgba(0,212,255,0.3)");
    assert_eq!(DropHighlight::Idle.background(), "");
    assert_eq!(DropHighlight::Idle.border_color(), "rgba(255,255,255,0.2)");
}
