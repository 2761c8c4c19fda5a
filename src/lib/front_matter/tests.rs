use serde_json::{Value, json};

use super::{FrontMatter, field_text, is_present};

#[test]
fn splits_yaml_block_from_body() {
    let raw = "---\ntitle: Hello\ndate: 2024-01-01\ntags: [rust, feeds]\n---\n# Heading\n\nBody text.\n";
    let fm = FrontMatter::from(raw);

    assert_eq!(fm.text("title").as_deref(), Some("Hello"));
    assert_eq!(fm.text("date").as_deref(), Some("2024-01-01"));
    assert_eq!(fm.data.get("tags"), Some(&json!(["rust", "feeds"])));
    assert!(fm.body.contains("# Heading"));
    assert!(fm.body.contains("Body text."));
    assert!(!fm.body.contains("title:"));
}

#[test]
fn missing_block_keeps_full_text() {
    let raw = "# Just markdown\n\nNo metadata here.\n";
    let fm = FrontMatter::from(raw);
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, raw);
}

#[test]
fn non_mapping_block_keeps_full_text() {
    let raw = "---\n- just\n- a list\n---\nBody\n";
    let fm = FrontMatter::from(raw);
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, raw);
}

#[test]
fn scalar_fields_render_as_text() {
    assert_eq!(field_text(&json!("x")), Some("x".to_string()));
    assert_eq!(field_text(&json!(2024)), Some("2024".to_string()));
    assert_eq!(field_text(&json!(true)), Some("true".to_string()));
    assert_eq!(field_text(&json!("")), None);
    assert_eq!(field_text(&Value::Null), None);
    assert_eq!(field_text(&json!({"a": 1})), None);
}

#[test]
fn presence_rejects_null_and_empty() {
    assert!(!is_present(&Value::Null));
    assert!(!is_present(&json!("")));
    assert!(is_present(&json!("garbage")));
    assert!(is_present(&json!(0)));
    assert!(is_present(&json!([])));
}
