//! Flattening property trees onto attribute targets.

use std::slice;

use super::target::AttributeTarget;
use super::tree::PropertyTree;
use super::value::PropertyValue;

/// How a tree is written to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// One flat write per top-level key. Nested trees are passed whole, as
    /// JSON objects, replacing whatever the attribute held.
    Batch,
    /// One write per leaf. Leaves of a nested tree are written through the
    /// namespaced form, using the nested tree's key as the namespace.
    Incremental,
}

/// Writes `tree` to `target`.
///
/// In [`ApplyMode::Incremental`], entries are visited depth-first in tree
/// order. A terminal directly under `parent_key` (or under a nested tree)
/// becomes `set_namespaced_attribute(namespace, key, value)`; a terminal
/// with no namespace becomes `set_attribute(key, value)`. Falsy values such
/// as `0`, `false` and `""` are written like any other. An empty nested
/// tree writes nothing. Nested trees are always flattened incrementally,
/// whatever the outer mode.
///
/// [`ApplyMode::Batch`] ignores `parent_key` and never descends.
///
/// Traversal uses an explicit stack, so deep trees do not grow the call
/// stack. In batch mode a nested tree is rendered with
/// [`PropertyTree::to_value`], which is also stack-free.
///
/// # Example
///
/// ```rust
/// use rvr_utils::{apply_properties, ApplyMode, AttributeCall, PropertyTree};
/// use serde_json::json;
///
/// let tree = PropertyTree::new()
///     .set("visible", true)
///     .nest("material", PropertyTree::new().set("color", "red"));
///
/// let mut calls: Vec<AttributeCall> = Vec::new();
/// apply_properties(&mut calls, &tree, ApplyMode::Incremental, None);
///
/// assert_eq!(calls[1], AttributeCall::SetNamespaced {
///     namespace: "material".into(),
///     name: "color".into(),
///     value: json!("red"),
/// });
/// ```
pub fn apply_properties<T>(
    target: &mut T,
    tree: &PropertyTree,
    mode: ApplyMode,
    parent_key: Option<&str>,
) where
    T: AttributeTarget + ?Sized,
{
    match mode {
        ApplyMode::Batch => {
            for (key, value) in tree.iter() {
                target.set_attribute(key, &value.as_value());
            }
        }
        ApplyMode::Incremental => apply_incremental(target, tree, parent_key),
    }
}

type Frame<'a> = (Option<&'a str>, slice::Iter<'a, (String, PropertyValue)>);

fn apply_incremental<'a, T>(target: &mut T, tree: &'a PropertyTree, parent_key: Option<&'a str>)
where
    T: AttributeTarget + ?Sized,
{
    let mut stack: Vec<Frame<'a>> = vec![(parent_key, tree.entries.iter())];

    while let Some(frame) = stack.last_mut() {
        let namespace = frame.0;
        let Some((key, value)) = frame.1.next() else {
            stack.pop();
            continue;
        };

        match value {
            PropertyValue::Terminal(value) => match namespace {
                Some(namespace) => target.set_namespaced_attribute(namespace, key, value),
                None => target.set_attribute(key, value),
            },
            PropertyValue::Nested(subtree) => {
                stack.push((Some(key.as_str()), subtree.entries.iter()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::AttributeCall;
    use serde_json::{json, Value};

    fn set(name: &str, value: Value) -> AttributeCall {
        AttributeCall::Set {
            name: name.into(),
            value,
        }
    }

    fn set_ns(namespace: &str, name: &str, value: Value) -> AttributeCall {
        AttributeCall::SetNamespaced {
            namespace: namespace.into(),
            name: name.into(),
            value,
        }
    }

    fn apply(tree: &PropertyTree, mode: ApplyMode, parent: Option<&str>) -> Vec<AttributeCall> {
        let mut calls = Vec::new();
        apply_properties(&mut calls, tree, mode, parent);
        calls
    }

    #[test]
    fn test_incremental_flat_tree() {
        let tree = PropertyTree::new().set("a", 1).set("b", "x");
        assert_eq!(
            apply(&tree, ApplyMode::Incremental, None),
            vec![set("a", json!(1)), set("b", json!("x"))]
        );
    }

    #[test]
    fn test_incremental_vector_is_single_call() {
        let tree = PropertyTree::new().vector("pos", 1.0, 2.0, 3.0);
        assert_eq!(
            apply(&tree, ApplyMode::Incremental, None),
            vec![set("pos", json!({"x": 1.0, "y": 2.0, "z": 3.0}))]
        );
    }

    #[test]
    fn test_incremental_nested_uses_namespace() {
        let tree = PropertyTree::new().nest("material", PropertyTree::new().set("color", "red"));
        assert_eq!(
            apply(&tree, ApplyMode::Incremental, None),
            vec![set_ns("material", "color", json!("red"))]
        );
    }

    #[test]
    fn test_incremental_with_parent_key() {
        let tree = PropertyTree::new().set("intensity", 2).set("type", "point");
        assert_eq!(
            apply(&tree, ApplyMode::Incremental, Some("light")),
            vec![
                set_ns("light", "intensity", json!(2)),
                set_ns("light", "type", json!("point")),
            ]
        );
    }

    #[test]
    fn test_incremental_namespace_is_immediate_parent() {
        let tree = PropertyTree::new()
            .set("before", 1)
            .nest(
                "outer",
                PropertyTree::new()
                    .set("a", 1)
                    .nest("inner", PropertyTree::new().set("b", 2))
                    .set("c", 3),
            )
            .set("after", 4);

        assert_eq!(
            apply(&tree, ApplyMode::Incremental, None),
            vec![
                set("before", json!(1)),
                set_ns("outer", "a", json!(1)),
                set_ns("inner", "b", json!(2)),
                set_ns("outer", "c", json!(3)),
                set("after", json!(4)),
            ]
        );
    }

    #[test]
    fn test_incremental_emits_falsy_values() {
        let tree = PropertyTree::new()
            .set("zero", 0)
            .set("off", false)
            .set("empty", "");
        assert_eq!(apply(&tree, ApplyMode::Incremental, None).len(), 3);
    }

    #[test]
    fn test_incremental_empty_nested_tree_writes_nothing() {
        let tree = PropertyTree::new().nest("geometry", PropertyTree::new());
        assert!(apply(&tree, ApplyMode::Incremental, None).is_empty());
    }

    #[test]
    fn test_batch_is_one_call_per_key() {
        let tree = PropertyTree::new().set("a", 1).set("b", 2);
        assert_eq!(
            apply(&tree, ApplyMode::Batch, None),
            vec![set("a", json!(1)), set("b", json!(2))]
        );
    }

    #[test]
    fn test_batch_passes_nested_tree_whole() {
        let tree = PropertyTree::new().nest(
            "material",
            PropertyTree::new().set("color", "red").set("opacity", 0.5),
        );
        assert_eq!(
            apply(&tree, ApplyMode::Batch, Some("ignored")),
            vec![set("material", json!({"color": "red", "opacity": 0.5}))]
        );
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let mut tree = PropertyTree::new().set("leaf", 1);
        for depth in 0..50_000 {
            tree = PropertyTree::new().nest(&format!("level{}", depth), tree);
        }
        let calls = apply(&tree, ApplyMode::Incremental, None);
        assert_eq!(calls, vec![set_ns("level0", "leaf", json!(1))]);
        assert_eq!(tree.leaf_count(), 1);
        drop(tree);
    }
}
