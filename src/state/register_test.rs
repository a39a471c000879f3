use super::*;

#[test]
fn exactly_eight_characters_is_valid() {
    assert!(password_is_valid("abcdefgh", REQUIRED_PASSWORD_LENGTH));
    assert_eq!(password_tone("abcdefgh", REQUIRED_PASSWORD_LENGTH), HintTone::Ok);
}

#[test]
fn seven_or_nine_characters_block_submission() {
    assert!(!password_is_valid("abcdefg", REQUIRED_PASSWORD_LENGTH));
    assert!(!password_is_valid("abcdefghi", REQUIRED_PASSWORD_LENGTH));
    assert_eq!(password_tone("abcdefghi", REQUIRED_PASSWORD_LENGTH), HintTone::Error);
    assert!(!password_is_valid("", REQUIRED_PASSWORD_LENGTH));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert_eq!("pässwörd".len(), 10);
    assert!(password_is_valid("pässwörd", REQUIRED_PASSWORD_LENGTH));
}

#[test]
fn password_error_message_names_length() {
    assert_eq!(password_error_message(8), "Password must be exactly 8 characters.");
}

#[test]
fn hint_tones_map_to_classes() {
    assert_eq!(HintTone::Ok.class(), "hint-ok");
    assert_eq!(HintTone::Ok.opposite_class(), "hint-error");
    assert_eq!(HintTone::Error.opposite_class(), "hint-ok");
}

#[test]
fn username_hint_follows_exists_flag() {
    let taken = UsernameHint::from_exists(true);
    assert_eq!(taken.text(), "Username is already taken.");
    assert_eq!(taken.tone(), Some(HintTone::Error));

    let free = UsernameHint::from_exists(false);
    assert_eq!(free.text(), "Username is available.");
    assert_eq!(free.tone(), Some(HintTone::Ok));

    assert_eq!(UsernameHint::Cleared.tone(), None);
}

#[test]
fn username_query_trims_and_skips_blank() {
    assert_eq!(username_query("  bob "), Some("bob"));
    assert_eq!(username_query("   "), None);
    assert_eq!(username_query(""), None);
}
