use super::*;

#[test]
fn test_key_properties() {
    let (key, code, key_code) = NamedKey::Enter.properties();
    assert_eq!(key, "Enter");
    assert_eq!(code, "Enter");
    assert_eq!(key_code, 13);
}

#[test]
fn test_arrow_keys_use_dom_names() {
    assert_eq!(NamedKey::Left.key(), "ArrowLeft");
    assert_eq!(NamedKey::Down.code(), "ArrowDown");
    assert_eq!(NamedKey::Up.key_code(), 38);
}

#[test]
fn test_modifier_bits() {
    assert_eq!(NamedKey::Alt.modifier_bit(), Some(1));
    assert_eq!(NamedKey::Control.modifier_bit(), Some(2));
    assert_eq!(NamedKey::Meta.modifier_bit(), Some(4));
    assert_eq!(NamedKey::Shift.modifier_bit(), Some(8));
    assert!(!NamedKey::Enter.is_modifier());
    assert!(NamedKey::Shift.is_modifier());
}

#[test]
fn test_key_text() {
    assert_eq!(NamedKey::Space.text(), Some(" "));
    assert_eq!(NamedKey::Numpad7.text(), Some("7"));
    assert_eq!(NamedKey::Enter.text(), Some("\r"));
    assert_eq!(NamedKey::F5.text(), None);
    assert_eq!(NamedKey::Shift.text(), None);
}

#[test]
fn test_logical_key_serialize() {
    let keys = vec![LogicalKey::Char('a'), LogicalKey::Named(NamedKey::PageUp)];
    let json = serde_json::to_string(&keys).unwrap();
    assert_eq!(json, r#"["a","PAGE_UP"]"#);
}

#[test]
fn test_key_batch_serialize() {
    let batch = KeyBatch::with_keys(true, [LogicalKey::from(NamedKey::Enter)]);
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json, serde_json::json!({"keys": ["ENTER"], "persist": true}));
}

#[test]
fn test_key_batch_new_is_empty() {
    let batch = KeyBatch::new(false);
    assert!(batch.is_empty());
    assert!(!batch.persist);
}
