use jrpc_shape::normalize;
use serde_json::{Value, json};

/// Collapse every singleton array and null every empty object.
fn collapse_reference(v: &Value) -> Value {
    match v {
        Value::Array(items) if items.len() == 1 => collapse_reference(&items[0]),
        Value::Array(items) => Value::Array(items.iter().map(collapse_reference).collect()),
        Value::Object(m) if m.is_empty() => Value::Null,
        Value::Object(m) => Value::Object(
            m.iter()
                .map(|(k, v)| (k.clone(), collapse_reference(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[test]
fn scalars_and_null_pass_through() {
    for v in [json!(null), json!(true), json!(0), json!(-1.5), json!(""), json!("x")] {
        assert_eq!(normalize(&v), v);
    }
}

#[test]
fn singleton_arrays_collapse_all_the_way_down() {
    assert_eq!(normalize(&json!(["x"])), json!("x"));
    assert_eq!(normalize(&json!([[["x"]]])), json!("x"));
    assert_eq!(normalize(&json!([[1, 2]])), json!([1, 2]));
    assert_eq!(normalize(&json!([{}])), json!(null));
}

#[test]
fn other_arrays_keep_length_and_order() {
    assert_eq!(normalize(&json!([])), json!([]));
    assert_eq!(normalize(&json!([[1], [2, 3], {}])), json!([1, [2, 3], null]));
    assert_eq!(normalize(&json!([[], []])), json!([[], []]));
}

#[test]
fn empty_objects_become_null() {
    assert_eq!(normalize(&json!({})), json!(null));
    assert_eq!(normalize(&json!({"a": {}})), json!({"a": null}));
    assert_eq!(normalize(&json!({"a": {"b": {}}})), json!({"a": {"b": null}}));
}

#[test]
fn object_keys_keep_their_order() {
    let v: Value = serde_json::from_str(r#"{"z": [1], "a": [2], "m": [3]}"#).unwrap();
    let out = serde_json::to_string(&normalize(&v)).unwrap();
    assert_eq!(out, r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn untabulated_fields_match_collapse_reference() {
    let cases = [
        json!({"a": [[1]], "b": {}, "c": [{}, [2]], "d": {"e": []}}),
        json!([{"x": [true]}, {"y": [[null]]}]),
        json!({"result": {"nested": [{"k": ["v"]}], "empty": {}, "pair": ["a", "b"]}}),
        json!({"jsonrpc": ["2.0"], "method": ["notifications/initialized"]}),
    ];
    for v in cases {
        assert_eq!(normalize(&v), collapse_reference(&v), "input: {v}");
    }
}

#[test]
fn never_invents_values() {
    let v = json!({"a": [1, [2], {"b": [["s"]]}], "c": [false]});
    assert_eq!(normalize(&v), json!({"a": [1, 2, {"b": "s"}], "c": false}));
}
