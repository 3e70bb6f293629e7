use serde_json::{Map, Value};

use crate::options::{FieldRule, Options};

use super::normalize_value;

/// Applies a field override. `None` means the value's shape is not covered by
/// the rule and generic normalization should handle it.
pub(super) fn apply(rule: FieldRule, v: &Value, options: &Options) -> Option<Value> {
    match (rule, v) {
        (FieldRule::Unwrap, Value::Object(m)) if m.is_empty() => Some(Value::Null),
        // The element is taken as-is, without further normalization.
        (FieldRule::Unwrap, Value::Array(items)) if items.len() == 1 => Some(items[0].clone()),
        (FieldRule::EmptySeqToMap, Value::Array(items)) if items.is_empty() => {
            Some(Value::Object(Map::new()))
        }
        (FieldRule::EmptyMapToSeq, Value::Object(m)) if m.is_empty() => {
            Some(Value::Array(Vec::new()))
        }
        (FieldRule::Passthrough, Value::Array(items)) => Some(Value::Array(
            items.iter().map(|it| normalize_value(it, options)).collect(),
        )),
        (FieldRule::ElementwiseUnwrapShallow, Value::Object(m)) => {
            let mut out = Map::with_capacity(m.len());
            for (k, vv) in m.iter() {
                out.insert(k.clone(), unwrap_singleton(vv).clone());
            }
            Some(Value::Object(out))
        }
        _ => None,
    }
}

fn unwrap_singleton(v: &Value) -> &Value {
    match v {
        Value::Array(items) if items.len() == 1 => &items[0],
        other => other,
    }
}
