//! serde_json interop

use std::io::{Read, Write};

use serde_json::Value as JsonValue;

use crate::Result;
use crate::options::Options;
use crate::value::{Number, Value};

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::U64(u))
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() => Value::Number(Number::F64(f)),
                        _ => Value::Null,
                    }
                }
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            JsonValue::Object(m) => Value::Object(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(Number::I64(i)) => JsonValue::from(i),
            Value::Number(Number::U64(u)) => JsonValue::from(u),
            // from_f64 yields None for NaN/±Infinity
            Value::Number(Number::F64(f)) => serde_json::Number::from_f64(f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::String(s) => JsonValue::String(s),
            Value::Array(a) => JsonValue::Array(a.into_iter().map(JsonValue::from).collect()),
            Value::Object(entries) => object_from_entries(entries),
            Value::Record(r) => object_from_entries(r.fields),
        }
    }
}

fn object_from_entries(entries: Vec<(String, Value)>) -> JsonValue {
    let mut out = serde_json::Map::with_capacity(entries.len());
    for (k, v) in entries {
        out.insert(k, JsonValue::from(v));
    }
    JsonValue::Object(out)
}

/// Prune a `serde_json::Value` directly.
pub fn prune_json(value: &JsonValue, options: &Options) -> JsonValue {
    let v = Value::from(value.clone());
    JsonValue::from(crate::prune::prune(&v, options))
}

pub fn to_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Two-space indented JSON.
pub fn to_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_str(s: &str) -> Result<Value> {
    Ok(serde_json::from_str(s)?)
}

/// Read a whole document from `reader` and decode it.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    from_str(&s)
}

/// Write `value` to `writer`, pretty or compact, followed by a newline.
pub fn to_writer<W: Write>(mut writer: W, value: &Value, pretty: bool) -> Result<()> {
    let s = if pretty { to_string_pretty(value)? } else { to_string(value)? };
    writer.write_all(s.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}
