//! Palette struct for color and opacity themes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mixin::mixin;

/// A named set of colors and opacities keyed by semantic role.
///
/// Values are kept as raw JSON so a palette can carry hex strings, CSS color
/// names and numeric opacities side by side. Keys keep document order.
///
/// # Example
///
/// ```rust
/// use rvr_utils::Palette;
///
/// let palette = Palette::new()
///     .with("primary", "#2196f3")
///     .with("background", "#fafafa")
///     .with("disabledOpacity", 0.38);
///
/// assert_eq!(palette.color("primary"), Some("#2196f3"));
/// assert_eq!(palette.opacity("disabledOpacity"), Some(0.38));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Map<String, Value>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON map.
    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Adds an entry, returning the updated palette for chaining.
    pub fn with<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Overlays `overrides` onto this palette, key by key.
    pub fn merged_with(mut self, overrides: &Palette) -> Self {
        mixin(&mut self.entries, &overrides.entries);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the entry as a string, if it is one.
    pub fn color(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Returns the entry as a number.
    ///
    /// Numeric strings such as `"0.5"` are accepted as well.
    pub fn opacity(&self, key: &str) -> Option<f64> {
        match self.entries.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Map<String, Value>> for Palette {
    fn from(entries: Map<String, Value>) -> Self {
        Self::from_map(entries)
    }
}
