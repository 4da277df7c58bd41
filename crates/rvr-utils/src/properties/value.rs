//! Tagged property values.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tree::PropertyTree;

/// A single entry in a [`PropertyTree`].
///
/// The variant decides how the applier treats the entry: a `Terminal` is
/// handed to the target as one attribute value, a `Nested` tree is flattened
/// into namespaced calls.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A leaf value: string, number, boolean, vector literal or any other
    /// JSON value the target should receive unchanged.
    Terminal(Value),
    /// The properties of a namespaced sub-component.
    Nested(PropertyTree),
}

impl PropertyValue {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PropertyValue::Terminal(_))
    }

    /// The value as it is passed to a target.
    ///
    /// Terminals are borrowed; nested trees are rendered into a JSON object.
    pub fn as_value(&self) -> Cow<'_, Value> {
        match self {
            PropertyValue::Terminal(value) => Cow::Borrowed(value),
            PropertyValue::Nested(tree) => Cow::Owned(tree.to_value()),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        PropertyValue::Terminal(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Terminal(Value::from(value))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Terminal(Value::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Terminal(Value::from(value))
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Terminal(Value::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Terminal(Value::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Terminal(Value::from(value))
    }
}

impl From<Vec3> for PropertyValue {
    fn from(value: Vec3) -> Self {
        PropertyValue::Terminal(value.into())
    }
}

impl From<PropertyTree> for PropertyValue {
    fn from(tree: PropertyTree) -> Self {
        PropertyValue::Nested(tree)
    }
}

/// A three-axis coordinate such as a position, rotation or scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        serde_json::json!({ "x": v.x, "y": v.y, "z": v.z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terminal_borrows_value() {
        let value = PropertyValue::from("red");
        assert!(value.is_terminal());
        assert!(matches!(value.as_value(), Cow::Borrowed(_)));
        assert_eq!(*value.as_value(), json!("red"));
    }

    #[test]
    fn test_nested_renders_object() {
        let value = PropertyValue::from(PropertyTree::new().set("color", "red"));
        assert!(!value.is_terminal());
        assert_eq!(*value.as_value(), json!({"color": "red"}));
    }

    #[test]
    fn test_vec3_into_value() {
        let value: Value = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(value, json!({"x": 1.0, "y": 2.0, "z": 3.0}));
    }
}
