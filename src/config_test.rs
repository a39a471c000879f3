use super::*;

#[test]
fn blank_config_block_yields_defaults() {
    assert_eq!(parse("  \n").expect("blank parses"), Config::default());
}

#[test]
fn defaults_match_stock_templates() {
    let config = Config::default();
    assert_eq!(config.register.debounce_ms, 400);
    assert_eq!(config.register.password_length, 8);
    assert_eq!(config.tag_cloud.font_min_px, 12.0);
    assert_eq!(config.tag_cloud.font_max_px, 26.0);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.nav.link_selector, ".glass-nav a");
}

#[test]
fn partial_block_overrides_only_named_fields() {
    let config = parse(r#"{ "register": { "debounceMs": 250 }, "effects": { "particles": false } }"#)
        .expect("partial config parses");
    assert_eq!(config.register.debounce_ms, 250);
    assert_eq!(config.register.username_id, "regUsername");
    assert!(!config.effects.particles);
    assert!(config.effects.ripple);
}

#[test]
fn malformed_block_is_an_error() {
    assert!(parse("{ not json").is_err());
    assert!(parse(r#"{ "register": { "debounceMs": "soon" } }"#).is_err());
}
