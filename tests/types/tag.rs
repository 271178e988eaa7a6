use error_tree::{tag, Tag};

#[test]
fn tags_display_with_quoted_values() {
    assert_eq!(tag("operation", "seek").to_string(), r#"operation:"seek""#);
    assert_eq!(tag("path", "a \"b\"").to_string(), r#"path:"a \"b\"""#);
}

#[test]
fn tags_order_by_name_then_value() {
    let mut tags = vec![tag("b", "1"), tag("a", "2"), tag("a", "1")];
    tags.sort();

    assert_eq!(tags, [Tag::new("a", "1"), Tag::new("a", "2"), Tag::new("b", "1")]);
}

#[test]
fn tags_convert_from_pairs() {
    let tag: Tag = ("env", String::from("production")).into();

    assert_eq!(tag.name, "env");
    assert_eq!(tag.value, "production");
}

#[cfg(feature = "serde")]
#[test]
fn tags_serialize_as_name_and_value() {
    let json = serde_json::to_value(tag("env", "production")).unwrap();

    assert_eq!(json, serde_json::json!({ "name": "env", "value": "production" }));
}
