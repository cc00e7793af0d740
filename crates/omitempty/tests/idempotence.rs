#![cfg(feature = "json")]
use omitempty::{Options, SequenceCheck, Value, prune};
use serde_json::json;

fn samples() -> Vec<Value> {
    vec![
        json!({"a": "   ", "B": {"c": 0, "D": [0, "", "x", {"E": null}]}, "f": false}),
        json!([[], {}, [{}], {"k": []}, " y ", 0.0, 1]),
        json!({"Deep": {"deeper": {"deepest": {"v": 0}}}, "list": [[[""]]]}),
        json!({"Name": "a", "NAME": "b", "nAmE": ""}),
    ]
    .into_iter()
    .map(Value::from)
    .collect()
}

#[test]
fn after_prune_is_idempotent() {
    for omit in [false, true] {
        let opts = Options::new()
            .with_omit_false_booleans(omit)
            .with_sequence_check(SequenceCheck::AfterPrune);
        for v in samples() {
            let once = prune(&v, &opts);
            assert_eq!(prune(&once, &opts), once, "input: {v:?}");
        }
    }
}

#[test]
fn before_prune_can_need_a_second_pass() {
    // Objects that only empty out after pruning stay behind as {} in sequences;
    // the next pass sees them as empty and drops them.
    let opts = Options::default();
    let v = Value::from(json!({"items": [{"a": ""}]}));
    let once = prune(&v, &opts);
    assert_eq!(serde_json::Value::from(once.clone()), json!({"items": [{}]}));
    let twice = prune(&once, &opts);
    assert_eq!(serde_json::Value::from(twice.clone()), json!({"items": []}));
    assert_eq!(prune(&twice, &opts), twice);
}

#[test]
fn output_keys_are_lowercase() {
    fn check(v: &Value) {
        match v {
            Value::Object(entries) => {
                for (k, child) in entries {
                    assert_eq!(k, &k.to_ascii_lowercase());
                    check(child);
                }
            }
            Value::Array(items) => items.iter().for_each(check),
            Value::Record(_) => panic!("records must not survive pruning"),
            _ => {}
        }
    }
    for v in samples() {
        check(&prune(&v, &Options::default()));
    }
}
