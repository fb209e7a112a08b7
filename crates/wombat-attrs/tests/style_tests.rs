//! Integration tests for style string parsing.

use std::collections::HashMap;

use wombat_attrs::parse_style;

fn pairs(text: &str) -> Vec<(String, String)> {
    parse_style(text)
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[test]
fn test_parse_style_basic() {
    assert_eq!(
        pairs("color: red; width: 10px;"),
        owned(&[("color", "red"), ("width", "10px")])
    );
}

#[test]
fn test_parse_style_trailing_declaration() {
    assert_eq!(pairs("a:b"), owned(&[("a", "b")]));
    assert_eq!(pairs("a:b;c:d"), owned(&[("a", "b"), ("c", "d")]));
}

#[test]
fn test_parse_style_trailing_key_without_value() {
    assert_eq!(pairs("a:b;c:"), owned(&[("a", "b"), ("c", "")]));
}

#[test]
fn test_parse_style_strips_whitespace() {
    assert_eq!(pairs(" a : b ; "), owned(&[("a", "b")]));
    assert_eq!(
        pairs("\tcolor :\r\n red ;\u{000C}"),
        owned(&[("color", "red")])
    );
}

#[test]
fn test_parse_style_removes_interior_whitespace() {
    assert_eq!(pairs("margin: 1px 2px;"), owned(&[("margin", "1px2px")]));
}

#[test]
fn test_parse_style_last_write_wins() {
    let style = parse_style("color: red; width: 1px; color: blue;");
    assert_eq!(style.get("color"), Some("blue"));
    assert_eq!(style.len(), 2);
    assert_eq!(
        pairs("color: red; width: 1px; color: blue;"),
        owned(&[("color", "blue"), ("width", "1px")])
    );
}

#[test]
fn test_parse_style_semicolon_without_property_is_ignored() {
    assert_eq!(pairs("orphan; a: b"), owned(&[("a", "b")]));
    assert_eq!(pairs("a: b; stray;"), owned(&[("a", "b")]));
    assert!(parse_style(";;;").is_empty());
}

#[test]
fn test_parse_style_empty() {
    assert!(parse_style("").is_empty());
    assert!(parse_style("   ").is_empty());
    // Text without any ':' never names a property.
    assert!(parse_style("just text").is_empty());
}

#[test]
fn test_style_map_lookup() {
    let style = parse_style("background: #fff; padding: 4dp");
    assert!(style.contains_key("padding"));
    assert!(!style.contains_key("margin"));
    assert_eq!(style.get("background"), Some("#fff"));

    let map: HashMap<String, String> = style.into();
    assert_eq!(map.get("padding").map(String::as_str), Some("4dp"));
}

#[test]
fn test_style_map_serializes_in_order() {
    let json = serde_json::to_string(&parse_style("b: 2; a: 1")).unwrap();
    assert_eq!(json, r#"{"b":"2","a":"1"}"#);
}
