//! Shallow object merging.

use serde_json::{Map, Value};

/// Copies every entry of `source` onto `target`, overwriting existing keys.
///
/// The merge is shallow: nested objects are replaced, not merged. Returns
/// `target` so calls can be chained.
///
/// ```rust
/// use rvr_utils::mixin;
/// use serde_json::json;
///
/// let mut target = json!({"a": 1, "b": {"c": 2}}).as_object().unwrap().clone();
/// let source = json!({"b": {"d": 3}, "e": 4}).as_object().unwrap().clone();
///
/// mixin(&mut target, &source);
/// assert_eq!(serde_json::Value::Object(target), json!({"a": 1, "b": {"d": 3}, "e": 4}));
/// ```
pub fn mixin<'a>(
    target: &'a mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'a mut Map<String, Value> {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_mixin_overwrites_and_adds() {
        let mut target = map(json!({"a": 1, "b": 2}));
        mixin(&mut target, &map(json!({"b": 3, "c": 4})));
        assert_eq!(Value::Object(target), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_mixin_empty_source_is_noop() {
        let mut target = map(json!({"a": 1}));
        mixin(&mut target, &Map::new());
        assert_eq!(Value::Object(target), json!({"a": 1}));
    }

    #[test]
    fn test_mixin_chains() {
        let mut target = Map::new();
        mixin(mixin(&mut target, &map(json!({"a": 1}))), &map(json!({"a": null})));
        assert_eq!(target.get("a"), Some(&Value::Null));
    }
}
