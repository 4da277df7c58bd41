//! Ordered property trees.

use std::slice;

use serde_json::{Map, Value};

use super::value::{PropertyValue, Vec3};

/// A possibly nested set of attributes to apply to an entity.
///
/// Entries keep insertion order, which is the order the applier emits them.
/// Setting a key that already exists replaces its value in place.
///
/// Dropping a tree, [`leaf_count`](Self::leaf_count) and
/// [`to_value`](Self::to_value) walk it with an explicit stack. The derived
/// `Clone`, `PartialEq` and `Debug` impls still recurse once per level.
///
/// # Example
///
/// ```rust
/// use rvr_utils::PropertyTree;
///
/// let tree = PropertyTree::new()
///     .set("visible", true)
///     .vector("position", 0.0, 1.6, -2.0)
///     .nest("material", PropertyTree::new().set("color", "#2196f3").set("opacity", 0.9));
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.leaf_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTree {
    pub(crate) entries: Vec<(String, PropertyValue)>,
}

impl PropertyTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a terminal value, returning the updated tree for chaining.
    pub fn set<V: Into<PropertyValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Adds a [`Vec3`] terminal.
    pub fn vector(self, key: &str, x: f64, y: f64, z: f64) -> Self {
        self.set(key, Vec3::new(x, y, z))
    }

    /// Adds a nested sub-component tree.
    pub fn nest(mut self, key: &str, subtree: PropertyTree) -> Self {
        self.insert(key, PropertyValue::Nested(subtree));
        self
    }

    pub fn insert(&mut self, key: &str, value: PropertyValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of terminal values anywhere in the tree.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            for (_, value) in &tree.entries {
                match value {
                    PropertyValue::Terminal(_) => count += 1,
                    PropertyValue::Nested(subtree) => pending.push(subtree),
                }
            }
        }
        count
    }

    /// Renders the tree as a JSON object.
    pub fn to_value(&self) -> Value {
        let mut stack: Vec<RenderFrame<'_>> = vec![(None, self.entries.iter(), Map::new())];

        while let Some((_, entries, map)) = stack.last_mut() {
            match entries.next() {
                Some((key, PropertyValue::Terminal(value))) => {
                    map.insert(key.clone(), value.clone());
                }
                Some((key, PropertyValue::Nested(subtree))) => {
                    stack.push((Some(key.as_str()), subtree.entries.iter(), Map::new()));
                }
                None => {
                    let Some((key, _, map)) = stack.pop() else {
                        break;
                    };
                    match (key, stack.last_mut()) {
                        (Some(key), Some((_, _, parent))) => {
                            parent.insert(key.to_string(), Value::Object(map));
                        }
                        _ => return Value::Object(map),
                    }
                }
            }
        }
        Value::Object(Map::new())
    }

    /// Builds a tree from untagged JSON.
    ///
    /// Returns `None` unless `value` is an object. Each entry is classified
    /// structurally: a non-object value, or an object that has an `x` key, is
    /// a terminal (so `{"x": 1, "y": 2, "z": 3}` stays one vector value);
    /// every other object becomes a nested tree. Arrays and `null` are
    /// terminals.
    ///
    /// This guess misreads a sub-component that legitimately has a property
    /// named `x`: it is passed whole instead of being flattened. Build the
    /// tree with [`PropertyTree::nest`] when that matters.
    pub fn from_json(value: &Value) -> Option<Self> {
        value.as_object().map(Self::from_json_map)
    }

    fn from_json_map(map: &Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .map(|(key, value)| {
                let entry = match value {
                    Value::Object(inner) if !inner.contains_key("x") => {
                        PropertyValue::Nested(Self::from_json_map(inner))
                    }
                    other => PropertyValue::Terminal(other.clone()),
                };
                (key.clone(), entry)
            })
            .collect();
        Self { entries }
    }
}

type RenderFrame<'a> = (
    Option<&'a str>,
    slice::Iter<'a, (String, PropertyValue)>,
    Map<String, Value>,
);

impl Drop for PropertyTree {
    fn drop(&mut self) {
        let mut pending: Vec<PropertyTree> = Vec::new();
        let mut entries = std::mem::take(&mut self.entries);
        loop {
            for (_, value) in entries.drain(..) {
                if let PropertyValue::Nested(mut subtree) = value {
                    pending.push(PropertyTree {
                        entries: std::mem::take(&mut subtree.entries),
                    });
                }
            }
            match pending.pop() {
                Some(mut tree) => entries = std::mem::take(&mut tree.entries),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_replaces_in_place() {
        let tree = PropertyTree::new().set("a", 1).set("b", 2).set("a", 3);
        let keys: Vec<_> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tree.get("a"), Some(&PropertyValue::from(3)));
    }

    #[test]
    fn test_leaf_count_nested() {
        let tree = PropertyTree::new()
            .set("a", 1)
            .nest(
                "b",
                PropertyTree::new()
                    .set("c", 2)
                    .nest("d", PropertyTree::new().set("e", 3)),
            )
            .nest("empty", PropertyTree::new());
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_to_value_keeps_order() {
        let tree = PropertyTree::new()
            .set("z", 1)
            .nest("material", PropertyTree::new().set("color", "red"));
        let value = tree.to_value();
        assert_eq!(value, json!({"z": 1, "material": {"color": "red"}}));
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "material"]);
    }

    #[test]
    fn test_from_json_classifies_vectors_as_terminal() {
        let tree = PropertyTree::from_json(&json!({
            "position": {"x": 1, "y": 2, "z": 3},
            "material": {"color": "red"},
            "tags": ["a", "b"],
            "parent": null
        }))
        .unwrap();

        assert!(tree.get("position").unwrap().is_terminal());
        assert!(!tree.get("material").unwrap().is_terminal());
        assert!(tree.get("tags").unwrap().is_terminal());
        assert!(tree.get("parent").unwrap().is_terminal());
    }

    #[test]
    fn test_from_json_x_key_is_terminal_even_when_zero() {
        let tree = PropertyTree::from_json(&json!({"offset": {"x": 0}})).unwrap();
        assert!(tree.get("offset").unwrap().is_terminal());
    }

    #[test]
    fn test_from_json_empty_object_is_nested() {
        let tree = PropertyTree::from_json(&json!({"geometry": {}})).unwrap();
        assert_eq!(
            tree.get("geometry"),
            Some(&PropertyValue::Nested(PropertyTree::new()))
        );
    }

    fn deep_tree(depth: usize) -> PropertyTree {
        let mut tree = PropertyTree::new().set("leaf", 1).set("other", 2);
        for level in 0..depth {
            tree = PropertyTree::new().nest(&format!("level{}", level), tree);
        }
        tree
    }

    #[test]
    fn test_deep_tree_counts_and_drops() {
        let tree = deep_tree(100_000);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.leaf_count(), 2);
        drop(tree);
    }

    #[test]
    fn test_to_value_nested_levels() {
        let value = deep_tree(3).to_value();
        assert_eq!(
            value,
            json!({"level2": {"level1": {"level0": {"leaf": 1, "other": 2}}}})
        );
    }

    #[test]
    fn test_to_value_keeps_order_after_nested_entry() {
        let tree = PropertyTree::new()
            .nest("a", PropertyTree::new().set("x1", 1))
            .set("b", 2)
            .nest("c", PropertyTree::new());
        let value = tree.to_value();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(value["c"], json!({}));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(PropertyTree::from_json(&json!([1, 2])).is_none());
        assert!(PropertyTree::from_json(&json!("a")).is_none());
    }
}
