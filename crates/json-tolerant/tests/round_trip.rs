//! End-to-end matrix for the public stringify/parse pair.

use json_tolerant::{
    parse, parse_with, stringify, stringify_with, Field, JsValue, MapKey, ParseError, Replacer,
    SerializeHook,
};
use num_bigint::BigInt;
use serde_json::json;

fn compact(value: &JsValue) -> Option<String> {
    stringify_with(value, None, 0)
}

#[test]
fn string_round_trip() {
    let value = JsValue::from("foo bar");
    assert_eq!(stringify(&value).as_deref(), Some(r#""foo bar""#));
    assert_eq!(parse(r#""foo bar""#).unwrap(), value);
}

#[test]
fn number_round_trip() {
    let value = JsValue::from(123);
    assert_eq!(stringify(&value).as_deref(), Some("123"));
    assert_eq!(parse("123").unwrap(), value);

    let fractional = JsValue::from(12.25);
    assert_eq!(stringify(&fractional).as_deref(), Some("12.25"));
    assert_eq!(parse("12.25").unwrap(), fractional);
}

#[test]
fn bigint_round_trip() {
    let value = JsValue::BigInt(123.into());
    assert_eq!(stringify(&value).as_deref(), Some(r#""123n""#));
    assert_eq!(parse(r#""123n""#).unwrap(), value);
}

#[test]
fn bigint_beyond_machine_precision_round_trip() {
    let digits = "123456789012345678901234567890123456789";
    let value = JsValue::BigInt(digits.parse::<BigInt>().unwrap());
    let text = compact(&value).unwrap();
    assert_eq!(text, format!(r#""{digits}n""#));
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn infinity_stringifies_to_null() {
    assert_eq!(stringify(&JsValue::Number(f64::INFINITY)).as_deref(), Some("null"));
    assert_eq!(stringify(&JsValue::Number(f64::NAN)).as_deref(), Some("null"));
}

#[test]
fn boolean_round_trip() {
    assert_eq!(stringify(&JsValue::Bool(true)).as_deref(), Some("true"));
    assert_eq!(parse("true").unwrap(), JsValue::Bool(true));
}

#[test]
fn null_round_trip() {
    assert_eq!(stringify(&JsValue::Null).as_deref(), Some("null"));
    assert_eq!(parse("null").unwrap(), JsValue::Null);
}

#[test]
fn undefined_produces_no_value() {
    assert_eq!(stringify(&JsValue::Undefined), None);
}

#[test]
fn function_produces_no_value() {
    assert_eq!(stringify(&JsValue::Function), None);
}

#[test]
fn array_round_trip() {
    let value = JsValue::array(vec![1.into(), 2.into(), 3.into()]);
    assert_eq!(compact(&value).as_deref(), Some("[1,2,3]"));
    assert_eq!(parse("[1,2,3]").unwrap(), value);
}

#[test]
fn map_flattens_to_a_plain_object() {
    let map = JsValue::map(vec![(MapKey::from("key"), JsValue::from("value"))]);
    assert_eq!(compact(&map).as_deref(), Some(r#"{"key":"value"}"#));

    // Asymmetric by design: the round trip yields a plain object, not a map.
    let round = parse(r#"{"key":"value"}"#).unwrap();
    assert_eq!(
        round,
        JsValue::object(vec![Field::new("key", JsValue::from("value"))])
    );
}

#[test]
fn set_flattens_to_a_plain_array() {
    let set = JsValue::set(vec![1.into(), 2.into(), 3.into()]);
    assert_eq!(compact(&set).as_deref(), Some("[1,2,3]"));

    let round = parse("[1,2,3]").unwrap();
    assert_eq!(round, JsValue::array(vec![1.into(), 2.into(), 3.into()]));
}

#[test]
fn serialization_hook_output_is_used_verbatim() {
    struct Timestamp;
    impl SerializeHook for Timestamp {
        fn to_json(&self) -> serde_json::Value {
            json!("2026-01-01T00:00:00.000Z")
        }
    }
    assert_eq!(
        stringify(&JsValue::custom(Timestamp)).as_deref(),
        Some(r#""2026-01-01T00:00:00.000Z""#)
    );
}

#[test]
fn hidden_fields_are_serialized_and_survive_the_round_trip() {
    let value = JsValue::object(vec![
        Field::new("null", JsValue::Null),
        Field::new("enumerable", JsValue::from("foo")),
        Field::hidden("nonEnumerable", JsValue::from("bar")),
    ]);
    assert_eq!(
        compact(&value).as_deref(),
        Some(r#"{"null":null,"enumerable":"foo","nonEnumerable":"bar"}"#)
    );

    let round = parse(&compact(&value).unwrap()).unwrap();
    assert_eq!(
        round,
        JsValue::object(vec![
            Field::new("null", JsValue::Null),
            Field::new("enumerable", JsValue::from("foo")),
            Field::new("nonEnumerable", JsValue::from("bar")),
        ])
    );
}

#[test]
fn default_indentation_is_four_spaces() {
    let value = JsValue::array(vec![1.into(), 2.into()]);
    assert_eq!(
        stringify(&value).as_deref(),
        Some("[\n    1,\n    2\n]")
    );
}

#[test]
fn nested_containers_round_trip() {
    let value = JsValue::object(vec![
        Field::new("list", JsValue::array(vec![JsValue::Null, JsValue::from(2.5)])),
        Field::new("big", JsValue::BigInt(9.into())),
        Field::new(
            "inner",
            JsValue::object(vec![Field::new("s", JsValue::from("x"))]),
        ),
    ]);
    let text = compact(&value).unwrap();
    assert_eq!(text, r#"{"list":[null,2.5],"big":"9n","inner":{"s":"x"}}"#);

    let round = parse(&text).unwrap();
    assert_eq!(
        round,
        JsValue::object(vec![
            Field::new("list", JsValue::array(vec![JsValue::Null, JsValue::from(2.5)])),
            Field::new("big", JsValue::BigInt(9.into())),
            Field::new(
                "inner",
                JsValue::object(vec![Field::new("s", JsValue::from("x"))]),
            ),
        ])
    );
}

#[test]
fn replacer_is_forwarded_to_the_codec() {
    let value = JsValue::object(vec![
        Field::new("keep", JsValue::from(1)),
        Field::new("drop", JsValue::from(2)),
    ]);
    let replacer = Replacer::Keys(vec!["keep".to_owned()]);
    assert_eq!(
        stringify_with(&value, Some(&replacer), 0).as_deref(),
        Some(r#"{"keep":1}"#)
    );
}

#[test]
fn user_reviver_is_forwarded_and_sees_converted_values() {
    let reviver = |key: &str, value: &JsValue| -> Option<JsValue> {
        if key == "big" {
            assert_eq!(*value, JsValue::BigInt(5.into()));
            Some(JsValue::from("seen"))
        } else {
            None
        }
    };
    let round = parse_with(r#"{"big":"5n","other":1}"#, &reviver).unwrap();
    assert_eq!(
        round,
        JsValue::object(vec![
            Field::new("big", JsValue::from("seen")),
            Field::new("other", JsValue::from(1)),
        ])
    );
}

#[test]
fn unrevived_tag_degrades_to_a_plain_string() {
    let text = compact(&JsValue::BigInt(123.into())).unwrap();
    // Decoding with the raw codec, skipping revival, keeps the tag as-is.
    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(raw, json!("123n"));
}

#[test]
fn malformed_text_surfaces_a_codec_error() {
    assert!(matches!(parse("{"), Err(ParseError::Json(_))));
}

#[test]
fn fractional_tag_surfaces_a_conversion_error() {
    assert!(matches!(
        parse(r#""1.5n""#),
        Err(ParseError::BigInt { literal }) if literal == "1.5n"
    ));
}

#[test]
fn negative_tagged_digits_stay_a_string() {
    assert_eq!(parse(r#""-5n""#).unwrap(), JsValue::from("-5n"));
}
