//! Recursive merge of JSON objects.

use serde_json::{Map, Value};

/// Merges `source` into `target`, returning the combined object.
///
/// Keys present in both whose values are both objects are merged
/// recursively; any other collision is won by `source`. Keys only in
/// `target` keep their position; keys new to `target` are appended.
///
/// ```rust
/// use serde_json::json;
/// use twtheme::deep_merge;
///
/// let target = json!({"primary": {"dark": "#000"}}).as_object().cloned().unwrap();
/// let source = json!({"primary": {"light": "#fff"}}).as_object().cloned().unwrap();
///
/// let merged = deep_merge(target, source);
/// assert_eq!(
///     serde_json::Value::Object(merged),
///     json!({"primary": {"dark": "#000", "light": "#fff"}})
/// );
/// ```
pub fn deep_merge(mut target: Map<String, Value>, source: Map<String, Value>) -> Map<String, Value> {
    merge_into(&mut target, source);
    target
}

/// In-place form of [`deep_merge`].
pub fn merge_into(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => match target.get_mut(&key) {
                Some(Value::Object(existing)) => merge_into(existing, incoming),
                _ => {
                    target.insert(key, Value::Object(incoming));
                }
            },
            leaf => {
                target.insert(key, leaf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_merges_siblings_recursively() {
        let merged = deep_merge(
            object(json!({"a": {"b": {"c": 1}}, "x": 1})),
            object(json!({"a": {"b": {"d": 2}, "e": 3}})),
        );
        assert_eq!(
            Value::Object(merged),
            json!({"a": {"b": {"c": 1, "d": 2}, "e": 3}, "x": 1})
        );
    }

    #[test]
    fn test_source_wins_on_leaf_conflict() {
        let merged = deep_merge(object(json!({"a": 1})), object(json!({"a": 2})));
        assert_eq!(Value::Object(merged), json!({"a": 2}));
    }

    #[test]
    fn test_object_replaces_leaf_and_leaf_replaces_object() {
        let merged = deep_merge(object(json!({"a": "x"})), object(json!({"a": {"b": "y"}})));
        assert_eq!(Value::Object(merged), json!({"a": {"b": "y"}}));

        let merged = deep_merge(object(json!({"a": {"b": "y"}})), object(json!({"a": "x"})));
        assert_eq!(Value::Object(merged), json!({"a": "x"}));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let merged = deep_merge(
            object(json!({"z": 1, "a": 1})),
            object(json!({"m": 2, "z": 2})),
        );
        let keys: Vec<_> = merged.keys().cloned().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(deep_merge(Map::new(), Map::new()).is_empty());
        let merged = deep_merge(Map::new(), object(json!({"a": 1})));
        assert_eq!(Value::Object(merged), json!({"a": 1}));
    }
}
