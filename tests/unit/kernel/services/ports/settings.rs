use super::*;

#[test]
fn empty_object_deserializes_to_defaults() {
    let decoded: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert_eq!(decoded, Settings::default());
    assert_eq!(decoded.sidebar.width, 32);
}

#[test]
fn serialized_defaults_read_back_unchanged() {
    let original = Settings::default();
    let json = serde_json::to_string_pretty(&original).expect("serialize Settings");
    let decoded: Settings = serde_json::from_str(&json).expect("deserialize Settings");
    assert_eq!(decoded, original);
}

#[test]
fn keybinding_rule_context_is_optional() {
    let rule: KeybindingRule =
        serde_json::from_str(r#"{"key":"ctrl+s","command":"save"}"#).expect("deserialize rule");
    assert_eq!(rule.context, None);

    let json = serde_json::to_string(&rule).expect("serialize rule");
    assert!(!json.contains("context"));
}
