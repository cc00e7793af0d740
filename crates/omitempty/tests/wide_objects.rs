#![cfg(feature = "json")]
use omitempty::{Options, Value, json, prune};

const WIDE: usize = 50_000;

#[test]
fn prunes_wide_object() {
    let entries: Vec<(String, Value)> = (0..WIDE)
        .map(|i| {
            let v = if i % 2 == 0 { Value::from(i + 1) } else { Value::from(" ") };
            (format!("Key{i}"), v)
        })
        .collect();
    let out = prune(&Value::Object(entries), &Options::default());
    match out {
        Value::Object(kept) => {
            assert_eq!(kept.len(), WIDE / 2);
            assert_eq!(kept[0], ("key0".to_string(), Value::from(1usize)));
            assert_eq!(kept.last().map(|(k, _)| k.as_str()), Some("key49998"));
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn wide_object_with_case_collisions() {
    // Every key appears twice in different case; the later value wins.
    let mut entries = Vec::with_capacity(WIDE * 2);
    for i in 0..WIDE {
        entries.push((format!("K{i}"), Value::from("first")));
    }
    for i in 0..WIDE {
        entries.push((format!("k{i}"), Value::from("second")));
    }
    let out = prune(&Value::Object(entries), &Options::default());
    match out {
        Value::Object(kept) => {
            assert_eq!(kept.len(), WIDE);
            assert_eq!(kept[7], ("k7".to_string(), Value::from("second")));
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn decodes_wide_object() -> Result<(), Box<dyn std::error::Error>> {
    let mut map = serde_json::Map::new();
    for i in 0..WIDE {
        map.insert(format!("k{i}"), serde_json::Value::from(i));
    }
    let text = serde_json::to_string(&serde_json::Value::Object(map))?;
    let v = json::from_str(&text)?;
    assert_eq!(v.len_entries(), Some(WIDE));
    assert_eq!(v.get("k123"), Some(&Value::from(123u64)));
    Ok(())
}

#[test]
fn decode_keeps_last_duplicate_in_first_position() -> Result<(), Box<dyn std::error::Error>> {
    let v = json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#)?;
    assert_eq!(
        v,
        Value::Object(vec![
            ("a".to_string(), Value::from(3u64)),
            ("b".to_string(), Value::from(2u64)),
        ])
    );
    Ok(())
}
