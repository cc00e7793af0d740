#![cfg(feature = "json")]
use omitempty::{Number, Options, Record, Value, json, prune};
use serde_json::json as j;

#[test]
fn deserializes_with_key_order() -> Result<(), Box<dyn std::error::Error>> {
    let v = json::from_str(r#"{"b": 1, "a": [true, null, 1.5, "x"], "c": -3}"#)?;
    match &v {
        Value::Object(entries) => {
            let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, ["b", "a", "c"]);
        }
        other => panic!("expected object, got {other:?}"),
    }
    assert_eq!(v.get("c"), Some(&Value::Number(Number::I64(-3))));
    assert_eq!(v.get("b"), Some(&Value::Number(Number::U64(1))));
    Ok(())
}

#[test]
fn pretty_output_uses_two_space_indent() -> Result<(), Box<dyn std::error::Error>> {
    let v = json::from_str(r#"{"Name":"John","Age":30,"Email":"  "}"#)?;
    let out = json::to_string_pretty(&prune(&v, &Options::default()))?;
    assert_eq!(out, "{\n  \"name\": \"John\",\n  \"age\": 30\n}");
    Ok(())
}

#[test]
fn records_serialize_as_maps() -> Result<(), Box<dyn std::error::Error>> {
    let rec: Value = Record::named("Point").field("x", 1).field("y", 2.5).into();
    assert_eq!(json::to_string(&rec)?, r#"{"x":1,"y":2.5}"#);
    Ok(())
}

#[test]
fn json_interop_roundtrip() {
    let original = j!({"a": [1, -2, 3.25, "s", null, false], "o": {"k": {}}});
    let back = serde_json::Value::from(Value::from(original.clone()));
    assert_eq!(back, original);
}

#[test]
fn non_finite_floats_become_null() {
    let v = Value::Number(Number::F64(f64::NAN));
    assert_eq!(serde_json::Value::from(v), serde_json::Value::Null);
    let v = omitempty::to_value(&f64::INFINITY).unwrap();
    assert_eq!(v, Value::Null);
}

#[test]
fn nan_is_not_zero() {
    assert!(!Number::F64(f64::NAN).is_zero());
    assert!(Number::F64(-0.0).is_zero());
    assert!(Number::U64(0).is_zero());
    assert!(!Number::I64(-1).is_zero());
}

#[test]
fn emptiness_predicate() {
    let opts = Options::default();
    let omit = Options::new().with_omit_false_booleans(true);
    assert!(omitempty::is_empty(&Value::Null, &opts));
    assert!(omitempty::is_empty(&Value::from(" \t"), &opts));
    assert!(!omitempty::is_empty(&Value::from("0"), &opts));
    assert!(omitempty::is_empty(&Value::from(0u8), &opts));
    assert!(!omitempty::is_empty(&Value::from(false), &opts));
    assert!(omitempty::is_empty(&Value::from(false), &omit));
    assert!(!omitempty::is_empty(&Value::from(true), &omit));
    assert!(omitempty::is_empty(&Value::Object(Vec::new()), &opts));
    assert!(!omitempty::is_empty(&Value::Array(Vec::new()), &opts));
    assert!(!omitempty::is_empty(&Record::new().into(), &opts));
}

#[test]
fn float_display_matches_serde_json() -> Result<(), Box<dyn std::error::Error>> {
    for f in [1e16, 1.0, 1.5, -0.25, 123456.789, 1e-7] {
        assert_eq!(Number::F64(f).to_string(), serde_json::to_string(&f)?);
    }
    Ok(())
}

#[test]
fn map_keys_stringify_like_display() -> Result<(), Box<dyn std::error::Error>> {
    let mut m = std::collections::BTreeMap::new();
    m.insert(7u32, "seven");
    m.insert(1u32, "one");
    let v = omitempty::to_value(&m)?;
    assert_eq!(v.get("1"), Some(&Value::from("one")));
    assert_eq!(v.get("7"), Some(&Value::from("seven")));
    Ok(())
}
