use json_numerals::{
    big_json, make_marker, parse, parse_with, stringify, stringify_pretty, stringify_with, BigInt,
    Error, Indent, Value,
};

fn big(digits: &str) -> BigInt {
    digits.parse().unwrap()
}

#[test]
fn test_parse_long_id() {
    let doc = parse(r#"{"id": 12345678901234567890}"#).unwrap();
    assert_eq!(
        doc.get("id"),
        Some(&Value::BigInt(big("12345678901234567890")))
    );
}

#[test]
fn test_stringify_long_id() {
    let value = big_json!({"id": (big "12345678901234567890")});
    assert_eq!(stringify(&value).unwrap(), r#"{"id":12345678901234567890}"#);
}

#[test]
fn test_long_digit_run_in_string_content_survives() {
    let doc = parse(r#"{"note": "call id 99999999999999999999 now"}"#).unwrap();
    assert_eq!(
        doc.get("note").and_then(Value::as_str),
        Some("call id 99999999999999999999 now")
    );
}

#[test]
fn test_parse_array_with_long_numeral() {
    let doc = parse("[1, 2, 99999999999999999999, 3]").unwrap();
    assert_eq!(
        doc,
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::BigInt(big("99999999999999999999")),
            Value::Number(3.0),
        ])
    );
}

#[test]
fn test_encode_decode_fixed_point() {
    let text = r#"{"small": 7, "big": 12345678901234567890, "neg": -98765432109876543210, "f": 1.5, "list": [9007199254740993, "x"], "ok": true}"#;
    let first = parse(text).unwrap();
    let reencoded = stringify(&first).unwrap();
    let second = parse(&reencoded).unwrap();
    assert_eq!(first, second);
    assert_eq!(stringify(&second).unwrap(), reencoded);
}

#[test]
fn test_negative_long_numeral() {
    let doc = parse(r#"{"balance": -12345678901234567890}"#).unwrap();
    assert_eq!(
        doc.get("balance"),
        Some(&Value::BigInt(big("-12345678901234567890")))
    );
    let text = stringify(&doc).unwrap();
    assert_eq!(text, r#"{"balance":-12345678901234567890}"#);
}

#[test]
fn test_sixteen_digit_boundary() {
    // 2^53 - 1 is still exact; 2^53 + 1 is the first lossy integer
    let doc = parse("[9007199254740991, 9007199254740993]").unwrap();
    assert_eq!(
        doc,
        Value::Array(vec![
            Value::Number(9_007_199_254_740_991.0),
            Value::BigInt(big("9007199254740993")),
        ])
    );
}

#[test]
fn test_fast_path_matches_baseline_text() {
    let text = r#"{"a":1,"b":[true,null,"x"],"c":2.5}"#;
    let doc = parse(text).unwrap();
    assert_eq!(stringify(&doc).unwrap(), text);
}

#[test]
fn test_false_positive_tagging_is_repaired() {
    // the trap string looks exactly like an array with a long numeral, so the
    // matcher tags it and the first tagged parse fails; the repair loop must
    // untag it and leave the string byte-for-byte intact
    let text = r#"{"big": 99999999999999999999, "trap": "[88888888888888888888]"}"#;
    let doc = parse(text).unwrap();
    assert_eq!(
        doc.get("big"),
        Some(&Value::BigInt(big("99999999999999999999")))
    );
    assert_eq!(
        doc.get("trap").and_then(Value::as_str),
        Some("[88888888888888888888]")
    );
}

#[test]
fn test_multiple_false_positives_repair_one_at_a_time() {
    let trap = "a,88888888888888888888,b,77777777777777777777,c";
    let text = format!(r#"{{"big": 99999999999999999999, "trap": "{}"}}"#, trap);
    let doc = parse(&text).unwrap();
    assert_eq!(
        doc.get("big"),
        Some(&Value::BigInt(big("99999999999999999999")))
    );
    assert_eq!(doc.get("trap").and_then(Value::as_str), Some(trap));
}

#[test]
fn test_false_positive_in_array_value() {
    let text = r#"[99999999999999999999, "x,88888888888888888888,y"]"#;
    let doc = parse(text).unwrap();
    assert_eq!(
        doc,
        Value::Array(vec![
            Value::BigInt(big("99999999999999999999")),
            Value::String("x,88888888888888888888,y".to_string()),
        ])
    );
}

#[test]
fn test_marker_collision_escalates() {
    // the document already contains the first marker character; the generator
    // must pick another and the codec must still work
    let text = "{\"note\": \"\u{0DF4}\", \"id\": 99999999999999999999}";
    let doc = parse(text).unwrap();
    assert_eq!(doc.get("note").and_then(Value::as_str), Some("\u{0DF4}"));
    assert_eq!(
        doc.get("id"),
        Some(&Value::BigInt(big("99999999999999999999")))
    );
}

#[test]
fn test_marker_never_occurs_in_text() {
    for text in [
        "plain",
        "\u{0DF4}",
        "\u{0DF4}\u{07F7}\u{058D}",
        "\u{0DF4}\u{0DF4} \u{07F7}\u{07F7} mixed \u{058D}",
    ] {
        let marker = make_marker(text);
        assert!(!text.contains(marker.as_str()));
    }
}

#[test]
fn test_malformed_input_is_a_baseline_error() {
    let err = parse(r#"{"a": 1,"#).unwrap_err();
    let baseline = serde_json::from_str::<serde_json::Value>(r#"{"a": 1,"#).unwrap_err();
    match err {
        Error::Syntax { line, column, msg } => {
            assert_eq!(line, baseline.line());
            assert_eq!(column, baseline.column());
            assert_eq!(msg, baseline.to_string());
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_malformed_input_with_long_numerals_still_fails() {
    // malformed text fails in the fast-path parse, before any tagging
    assert!(parse("[99999999999999999999,").is_err());
}

#[test]
fn test_reviver_runs_on_fast_path() {
    let mut keys = Vec::new();
    let doc = parse_with(r#"{"a": 1, "b": [2, 3]}"#, |key, value| {
        keys.push(key.to_string());
        match value {
            Value::Number(n) => Value::Number(n * 10.0),
            other => other,
        }
    })
    .unwrap();
    assert_eq!(doc.get("a"), Some(&Value::Number(10.0)));
    assert_eq!(
        doc.get("b"),
        Some(&Value::Array(vec![
            Value::Number(20.0),
            Value::Number(30.0)
        ]))
    );
    // bottom-up: children before their container, root key last
    assert_eq!(keys, vec!["a", "0", "1", "b", ""]);
}

#[test]
fn test_reviver_observes_promoted_bigint() {
    let mut seen = None;
    parse_with(r#"{"id": 12345678901234567890}"#, |key, value| {
        if key == "id" {
            seen = Some(value.clone());
        }
        value
    })
    .unwrap();
    assert_eq!(seen, Some(Value::BigInt(big("12345678901234567890"))));
}

#[test]
fn test_replacer_can_substitute_values() {
    let value = big_json!({"id": (big "12345678901234567890"), "secret": "hunter2"});
    let text = stringify_with(
        &value,
        |key, v| {
            if key == "secret" {
                Value::String("***".to_string())
            } else {
                v
            }
        },
        Indent::None,
    )
    .unwrap();
    assert_eq!(text, r#"{"id":12345678901234567890,"secret":"***"}"#);
}

#[test]
fn test_replacer_can_introduce_bigints() {
    // the probe pass must notice bigints produced by the replacer, not just
    // the ones already in the value graph
    let value = big_json!({"id": "12345678901234567890"});
    let text = stringify_with(
        &value,
        |key, v| {
            if key == "id" {
                match v.as_str().and_then(|s| s.parse::<BigInt>().ok()) {
                    Some(b) => Value::BigInt(b),
                    None => v,
                }
            } else {
                v
            }
        },
        Indent::None,
    )
    .unwrap();
    assert_eq!(text, r#"{"id":12345678901234567890}"#);
}

#[test]
fn test_stringify_pretty() {
    let value = big_json!({"id": (big "12345678901234567890"), "n": 1});
    assert_eq!(
        stringify_pretty(&value).unwrap(),
        "{\n  \"id\": 12345678901234567890,\n  \"n\": 1\n}"
    );
}

#[test]
fn test_stringify_tab_indent() {
    let value = big_json!([1, 2]);
    assert_eq!(
        stringify_with(&value, |_, v| v, Indent::Tab).unwrap(),
        "[\n\t1,\n\t2\n]"
    );
}

#[test]
fn test_pretty_parse_roundtrip() {
    let value = big_json!({
        "ids": [(big "99999999999999999999"), (big "88888888888888888888")],
        "meta": {"ok": true}
    });
    let text = stringify_pretty(&value).unwrap();
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn test_object_member_order_is_preserved() {
    let doc = parse(r#"{"z": 1, "a": 2, "m": 12345678901234567890}"#).unwrap();
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_deeply_nested_long_numerals() {
    let text = r#"{"a": {"b": [{"c": [99999999999999999999]}]}}"#;
    let doc = parse(text).unwrap();
    let inner = doc
        .get("a")
        .and_then(|v| v.get("b"))
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|v| v.get("c"))
        .and_then(Value::as_array)
        .and_then(|items| items.first());
    assert_eq!(inner, Some(&Value::BigInt(big("99999999999999999999"))));
    assert_eq!(stringify(&doc).unwrap(), r#"{"a":{"b":[{"c":[99999999999999999999]}]}}"#);
}

#[test]
fn test_digit_string_value_stays_a_string() {
    // quoted numerals are strings, not numbers, and must never be promoted
    let text = r#"{"id": "12345678901234567890", "real": 99999999999999999999}"#;
    let doc = parse(text).unwrap();
    assert_eq!(
        doc.get("id").and_then(Value::as_str),
        Some("12345678901234567890")
    );
    assert_eq!(
        doc.get("real"),
        Some(&Value::BigInt(big("99999999999999999999")))
    );
}

#[test]
fn test_whitespace_heavy_document() {
    let text = "{\n  \"id\" :   12345678901234567890 ,\n  \"n\" : 1\n}";
    let doc = parse(text).unwrap();
    assert_eq!(
        doc.get("id"),
        Some(&Value::BigInt(big("12345678901234567890")))
    );
}
