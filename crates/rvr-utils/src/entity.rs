//! In-memory scene entities.

use serde_json::{Map, Value};

use crate::classes::ClassList;
use crate::properties::{apply_properties, ApplyMode, AttributeTarget, PropertyTree};

/// Tag used when no primitive name is given.
pub const DEFAULT_ENTITY_TAG: &str = "a-entity";

/// Prefix every primitive tag name carries.
pub const PRIMITIVE_PREFIX: &str = "a-";

/// A scene-graph node: a tag name, component attributes and CSS classes.
///
/// Flat writes replace an attribute. Namespaced writes update one property
/// of a component, turning the attribute into an object if it was not one.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    tag_name: String,
    attributes: Map<String, Value>,
    classes: ClassList,
}

impl Entity {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attributes: Map::new(),
            classes: ClassList::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Reads one property of a component attribute.
    pub fn component_property(&self, namespace: &str, name: &str) -> Option<&Value> {
        self.attributes.get(namespace)?.as_object()?.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    /// All attributes, in the order they were first set.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    pub fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    /// Applies a tree of updates one leaf at a time.
    pub fn update(&mut self, properties: &PropertyTree) {
        apply_properties(self, properties, ApplyMode::Incremental, None);
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(DEFAULT_ENTITY_TAG)
    }
}

impl AttributeTarget for Entity {
    fn set_attribute(&mut self, name: &str, value: &Value) {
        self.attributes.insert(name.to_string(), value.clone());
    }

    fn set_namespaced_attribute(&mut self, namespace: &str, name: &str, value: &Value) {
        let slot = self
            .attributes
            .entry(namespace.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(component) = slot {
            component.insert(name.to_string(), value.clone());
        }
    }
}

/// Creates an entity, writing `properties` in batch mode.
///
/// `name` is used as the tag when it names a primitive (starts with `a-`);
/// anything else yields a plain `a-entity`.
///
/// ```rust
/// use rvr_utils::{create_entity, PropertyTree};
/// use serde_json::json;
///
/// let props = PropertyTree::new().set("radius", 0.5).set("color", "tomato");
/// let sphere = create_entity(Some("a-sphere"), Some(&props));
///
/// assert_eq!(sphere.tag_name(), "a-sphere");
/// assert_eq!(sphere.attribute("radius"), Some(&json!(0.5)));
/// ```
pub fn create_entity(name: Option<&str>, properties: Option<&PropertyTree>) -> Entity {
    let tag = name
        .filter(|n| n.starts_with(PRIMITIVE_PREFIX))
        .unwrap_or(DEFAULT_ENTITY_TAG);
    let mut entity = Entity::new(tag);
    if let Some(properties) = properties {
        apply_properties(&mut entity, properties, ApplyMode::Batch, None);
    }
    entity
}
