use super::*;

fn ack(success: bool, like_count: Option<u64>) -> ToggleAck {
    ToggleAck { success, like_count }
}

#[test]
fn unsuccessful_ack_never_changes_state() {
    let before = ToggleState { active: false, count: Some(3) };
    for kind in [ToggleKind::Like, ToggleKind::Follow, ToggleKind::Bookmark] {
        assert_eq!(before.acknowledge(kind, &ack(false, Some(4))), None);
        assert_eq!(before.acknowledge(kind, &ToggleAck::default()), None);
    }
}

#[test]
fn like_ack_without_count_is_ignored() {
    let before = ToggleState { active: false, count: Some(3) };
    assert_eq!(before.acknowledge(ToggleKind::Like, &ack(true, None)), None);
}

#[test]
fn like_ack_flips_and_takes_server_count() {
    let before = ToggleState { active: false, count: Some(3) };
    let after = before.acknowledge(ToggleKind::Like, &ack(true, Some(4))).expect("acknowledged");
    assert_eq!(after, ToggleState { active: true, count: Some(4) });

    let back = after.acknowledge(ToggleKind::Like, &ack(true, Some(3))).expect("acknowledged");
    assert_eq!(back, before);
}

#[test]
fn follow_and_bookmark_flip_on_success() {
    let before = ToggleState { active: true, count: None };
    assert_eq!(
        before.acknowledge(ToggleKind::Follow, &ack(true, None)),
        Some(ToggleState { active: false, count: None })
    );
    assert_eq!(
        before.acknowledge(ToggleKind::Bookmark, &ack(true, Some(99))),
        Some(ToggleState { active: false, count: None })
    );
}

#[test]
fn like_status_seeds_state() {
    let status = LikeStatus { liked: true, like_count: 12 };
    assert_eq!(ToggleState::from_like_status(&status), ToggleState { active: true, count: Some(12) });
}

#[test]
fn like_view_shows_label_and_count() {
    let view = view_for(ToggleKind::Like, ToggleState { active: true, count: Some(5) });
    assert_eq!(view.label, Some("Liked"));
    assert_eq!(view.count_text.as_deref(), Some("(5)"));
    assert_eq!(view_for(ToggleKind::Like, ToggleState::default()).label, Some("Like"));
}

#[test]
fn follow_view_swaps_icon() {
    let on = view_for(ToggleKind::Follow, ToggleState { active: true, count: None });
    let off = view_for(ToggleKind::Follow, ToggleState { active: false, count: None });
    assert_eq!((on.label, on.icon_class), (Some("Following"), Some("fas fa-check")));
    assert_eq!((off.label, off.icon_class), (Some("Follow"), Some("fas fa-user-plus")));
}

#[test]
fn bookmark_view_switches_palette() {
    let on = view_for(ToggleKind::Bookmark, ToggleState { active: true, count: None });
    let off = view_for(ToggleKind::Bookmark, ToggleState { active: false, count: None });
    assert_eq!(on.background, Some("rgba(255,107,53,0.15)"));
    assert_eq!(off.border_color, Some("rgba(0,212,255,0.1)"));
    assert_eq!(on.label, None);
}

#[test]
fn active_classes_match_templates() {
    assert_eq!(ToggleKind::Like.active_class(), "liked");
    assert_eq!(ToggleKind::Follow.active_class(), "following");
    assert_eq!(ToggleKind::Bookmark.active_class(), "bookmarked");
}

#[test]
fn count_text_reads_parenthesized_totals() {
    assert_eq!(parse_count_text("(12)"), Some(12));
    assert_eq!(parse_count_text(" 3 likes"), Some(3));
    assert_eq!(parse_count_text("()"), None);
    assert_eq!(parse_count_text(""), None);
}
