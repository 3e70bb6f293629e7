#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fn scalar_leaves(v: &Value) -> usize {
    match v {
        Value::Null => 0,
        Value::Array(items) => items.iter().map(scalar_leaves).sum(),
        Value::Object(m) => m.values().map(scalar_leaves).sum(),
        _ => 1,
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(original) = serde_json::from_str::<Value>(s) {
            let fixed = jrpc_shape::normalize(&original);
            if scalar_leaves(&original) != scalar_leaves(&fixed) {
                panic!(
                    "Leaf count changed!\nOriginal: {}\nNormalized: {}",
                    serde_json::to_string_pretty(&original).unwrap(),
                    serde_json::to_string_pretty(&fixed).unwrap()
                );
            }
            serde_json::to_string(&fixed).expect("normalized value serializes");
        }
    }
});
