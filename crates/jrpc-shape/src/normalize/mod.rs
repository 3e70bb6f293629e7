//! Shape normalization for JSON produced by serializers that cannot tell a
//! scalar from a one-element array, or an empty object from an empty array.
//!
//! Rules are applied top-down per node:
//! - one-element arrays collapse to their (normalized) element, recursively;
//! - other arrays keep their length, each element normalized;
//! - empty objects become `null`;
//! - members of non-empty objects go through the [`OverrideTable`] first and
//!   fall back to generic normalization when no override fires;
//! - scalars and `null` pass through unchanged.
//!
//! The empty-object-to-null rule is a heuristic: an untabulated field that
//! legitimately holds `{}` is rendered as `null` unless it is listed in
//! [`Options::keep_empty_objects`].
//!
//! [`OverrideTable`]: crate::options::OverrideTable

mod fields;

use serde_json::{Map, Value};

use crate::options::Options;

pub fn normalize_value(v: &Value, options: &Options) -> Value {
    match v {
        Value::Null => Value::Null,
        Value::Array(items) if items.len() == 1 => normalize_value(&items[0], options),
        Value::Array(items) => {
            Value::Array(items.iter().map(|it| normalize_value(it, options)).collect())
        }
        Value::Object(m) if m.is_empty() => Value::Null,
        Value::Object(m) => {
            let mut out = Map::with_capacity(m.len());
            for (k, vv) in m.iter() {
                out.insert(k.clone(), normalize_member(k, vv, options));
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn normalize_member(key: &str, v: &Value, options: &Options) -> Value {
    if let Some(rule) = options.overrides.get(key) {
        if let Some(fixed) = fields::apply(rule, v, options) {
            return fixed;
        }
    }
    if is_empty_object(v) && options.keep_empty_objects.contains(key) {
        return Value::Object(Map::new());
    }
    normalize_value(v, options)
}

fn is_empty_object(v: &Value) -> bool {
    matches!(v, Value::Object(m) if m.is_empty())
}
