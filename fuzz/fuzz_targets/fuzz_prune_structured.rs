#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use omitempty::{Number, Options, Record, SequenceCheck, Value, prune};
use arbitrary::Arbitrary;

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 11 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(Number::I64(u.int_in_range(-2..=2)?)),
            3 => {
                let n: f64 = u.arbitrary()?;
                // NaN never compares equal to itself
                if n.is_nan() { Value::Null } else { Value::Number(Number::F64(n)) }
            }
            4 => {
                let s: String = u.arbitrary()?;
                Value::String(s)
            }
            5 | 6 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            7 => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut rec = Record::new();
                for _ in 0..size {
                    let name: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    rec.fields.push((name, fv.to_value(u, depth + 1)?));
                }
                Value::Record(rec)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj: Vec<(String, Value)> = Vec::with_capacity(size);
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    let v = fv.to_value(u, depth + 1)?;
                    // Object keys are unique
                    if let Some(slot) = obj.iter_mut().find(|(k, _)| *k == key) {
                        slot.1 = v;
                    } else {
                        obj.push((key, v));
                    }
                }
                Value::Object(obj)
            }
        })
    }
}

fn assert_lowercase(v: &Value) {
    match v {
        Value::Object(entries) => {
            for (k, child) in entries {
                assert_eq!(k, &k.to_ascii_lowercase(), "key not folded");
                assert_lowercase(child);
            }
        }
        Value::Array(items) => items.iter().for_each(assert_lowercase),
        Value::Record(_) => panic!("record survived pruning"),
        _ => {}
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let omit: bool = u.arbitrary().unwrap_or(false);
            let opts = Options::new()
                .with_omit_false_booleans(omit)
                .with_sequence_check(SequenceCheck::AfterPrune);

            let once = prune(&value, &opts);
            assert_lowercase(&once);
            let twice = prune(&once, &opts);
            if once != twice {
                panic!("prune not idempotent!\nInput: {:?}\nOnce: {:?}\nTwice: {:?}", value, once, twice);
            }
        }
    }
});
