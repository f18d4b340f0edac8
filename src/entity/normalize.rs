//! Flattening of nested payloads into dot-path keys.

use serde_json::{Map, Value};

/// Flattens a payload into a single-level map of dot-joined paths rooted at
/// `prefix`.
///
/// Every scalar leaf (including `null`) becomes one entry. Array items are
/// addressed by index. Empty objects and arrays have no leaves and produce
/// no entries. A scalar payload maps to a single entry under `prefix`.
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::entity::normalize;
/// use serde_json::json;
///
/// let flat = normalize("events", &json!({"name": {"html": "Foo"}, "capacity": 10}));
///
/// assert_eq!(flat["events.name.html"], json!("Foo"));
/// assert_eq!(flat["events.capacity"], json!(10));
/// ```
#[must_use]
pub fn normalize(prefix: &str, payload: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten(prefix.to_string(), payload, &mut flat);
    flat
}

fn flatten(path: String, value: &Value, flat: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                flatten(child_path(&path, key), item, flat);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(child_path(&path, &index.to_string()), item, flat);
            }
        }
        leaf => {
            flat.insert(path, leaf.clone());
        }
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Deep-merges `patch` into `target`.
///
/// Objects merge key by key; any other value in `patch` replaces the value
/// in `target`.
pub(crate) fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, patch) => *target = patch,
    }
}
