//! Recursive removal of blank values from rendered payloads.
//!
//! Blank means absent (`null`) or an empty string. Falsy values such as
//! `0` and `false` are meaningful to the receiving platforms and are kept.

use serde_json::{Map, Value};

/// Whether a leaf value counts as blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Drop blank entries from a map, recursing into nested maps.
///
/// Nested maps are filtered first and dropped when nothing is left in them.
/// Arrays are kept as they are unless empty; their elements are positional
/// and are never filtered. Key order is preserved.
///
/// ```rust
/// use serde_json::json;
/// use sns_push::message::strip_blank;
///
/// let payload = json!({
///     "aps": {"alert": {"title": null, "body": ""}, "badge": 0},
///     "flag": false,
///     "extra": ""
/// });
///
/// let filtered = strip_blank(payload.as_object().unwrap().clone());
/// assert_eq!(serde_json::Value::Object(filtered), json!({"aps": {"badge": 0}, "flag": false}));
/// ```
pub fn strip_blank(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter_map(|(key, value)| strip_value(value).map(|value| (key, value)))
        .collect()
}

fn strip_value(value: Value) -> Option<Value> {
    match value {
        Value::Object(map) => {
            let map = strip_blank(map);
            (!map.is_empty()).then_some(Value::Object(map))
        }
        Value::Array(items) if items.is_empty() => None,
        value if is_blank(&value) => None,
        value => Some(value),
    }
}
