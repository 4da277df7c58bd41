//! The attribute-setting capability.

use serde_json::Value;

/// Anything that accepts attribute writes.
///
/// Mirrors the two forms of a scene entity's `setAttribute`: a flat write
/// that replaces the whole attribute, and a namespaced write that updates a
/// single property of a component.
pub trait AttributeTarget {
    /// Replaces attribute `name` with `value`.
    fn set_attribute(&mut self, name: &str, value: &Value);

    /// Sets property `name` of component `namespace` to `value`.
    fn set_namespaced_attribute(&mut self, namespace: &str, name: &str, value: &Value);
}

impl<T: AttributeTarget + ?Sized> AttributeTarget for &mut T {
    fn set_attribute(&mut self, name: &str, value: &Value) {
        (**self).set_attribute(name, value)
    }

    fn set_namespaced_attribute(&mut self, namespace: &str, name: &str, value: &Value) {
        (**self).set_namespaced_attribute(namespace, name, value)
    }
}

/// One recorded attribute write.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeCall {
    Set {
        name: String,
        value: Value,
    },
    SetNamespaced {
        namespace: String,
        name: String,
        value: Value,
    },
}

impl AttributeCall {
    /// Replays this write onto another target.
    pub fn replay<T: AttributeTarget + ?Sized>(&self, target: &mut T) {
        match self {
            AttributeCall::Set { name, value } => target.set_attribute(name, value),
            AttributeCall::SetNamespaced {
                namespace,
                name,
                value,
            } => target.set_namespaced_attribute(namespace, name, value),
        }
    }
}

/// Records writes in order, e.g. to forward them to a host later.
impl AttributeTarget for Vec<AttributeCall> {
    fn set_attribute(&mut self, name: &str, value: &Value) {
        self.push(AttributeCall::Set {
            name: name.to_string(),
            value: value.clone(),
        });
    }

    fn set_namespaced_attribute(&mut self, namespace: &str, name: &str, value: &Value) {
        self.push(AttributeCall::SetNamespaced {
            namespace: namespace.to_string(),
            name: name.to_string(),
            value: value.clone(),
        });
    }
}
