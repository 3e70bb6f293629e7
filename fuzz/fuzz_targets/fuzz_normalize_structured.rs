#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Number, Value};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 6;
const MAX_OBJECT_SIZE: usize = 6;

// Keys with field-specific rules show up often so every override gets exercised.
const KEYS: &[&str] = &[
    "id",
    "tools",
    "properties",
    "required",
    "content",
    "error",
    "result",
    "name",
];

#[derive(Arbitrary, Debug)]
struct Seed {
    choice: u8,
}

fn build(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
    if depth >= MAX_DEPTH {
        return Ok(Value::Null);
    }
    let seed: Seed = u.arbitrary()?;
    Ok(match seed.choice % 7 {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => Value::Number(Number::from(u.arbitrary::<i64>()?)),
        3 => Value::String(u.arbitrary()?),
        4 => {
            let len = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(build(u, depth + 1)?);
            }
            Value::Array(items)
        }
        5 => Value::Array(vec![build(u, depth + 1)?]),
        _ => {
            let len = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
            let mut m = Map::new();
            for _ in 0..len {
                let key = KEYS[u.int_in_range(0..=KEYS.len() - 1)?];
                m.insert(key.to_string(), build(u, depth + 1)?);
            }
            Value::Object(m)
        }
    })
}

fn scalar_leaves(v: &Value) -> usize {
    match v {
        Value::Null => 0,
        Value::Array(items) => items.iter().map(scalar_leaves).sum(),
        Value::Object(m) => m.values().map(scalar_leaves).sum(),
        _ => 1,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(original) = build(&mut u, 0) {
        let fixed = jrpc_shape::normalize(&original);
        assert_eq!(
            scalar_leaves(&original),
            scalar_leaves(&fixed),
            "leaf count changed for {original}"
        );
    }
});
