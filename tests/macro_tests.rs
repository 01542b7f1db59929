use json_numerals::{big_json, parse, stringify, JsonMap, Value};

#[test]
fn test_macro_primitives() {
    assert_eq!(big_json!(null), Value::Null);
    assert_eq!(big_json!(true), Value::Bool(true));
    assert_eq!(big_json!(false), Value::Bool(false));
    assert_eq!(big_json!(7), Value::Number(7.0));
    assert_eq!(big_json!(2.5), Value::Number(2.5));
    assert_eq!(big_json!("text"), Value::String("text".to_string()));
}

#[test]
fn test_macro_big_literal() {
    let value = big_json!(big "340282366920938463463374607431768211456");
    assert_eq!(
        value.as_bigint().map(ToString::to_string),
        Some("340282366920938463463374607431768211456".to_string())
    );
}

#[test]
fn test_macro_nested_document() {
    let value = big_json!({
        "user": {
            "id": (big "12345678901234567890"),
            "name": "Alice",
            "active": true
        },
        "scores": [1, 2.5, (big "-99999999999999999999")],
        "extra": null
    });

    let user = value.get("user").unwrap();
    assert!(user.get("id").unwrap().is_bigint());
    assert_eq!(user.get("name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(user.get("active").and_then(Value::as_bool), Some(true));

    let scores = value.get("scores").and_then(Value::as_array).unwrap();
    assert_eq!(scores[0], Value::Number(1.0));
    assert_eq!(scores[1], Value::Number(2.5));
    assert!(scores[2].is_bigint());

    assert_eq!(value.get("extra"), Some(&Value::Null));
}

#[test]
fn test_macro_empty_collections() {
    assert_eq!(big_json!([]), Value::Array(vec![]));
    assert_eq!(big_json!({}), Value::Object(JsonMap::new()));
}

#[test]
fn test_macro_trailing_commas() {
    let value = big_json!({
        "a": 1,
        "b": [1, 2,],
    });
    assert_eq!(value.as_object().map(JsonMap::len), Some(2));
}

#[test]
fn test_macro_value_roundtrips_through_codec() {
    let value = big_json!({
        "id": (big "12345678901234567890"),
        "tags": ["x", "y"],
        "n": 3
    });
    let text = stringify(&value).unwrap();
    assert_eq!(parse(&text).unwrap(), value);
}
