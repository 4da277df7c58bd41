//! Palette configuration and the resolution policy.

use std::collections::HashMap;

use serde_json::Value;

use super::palette::Palette;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{InvalidInput, Result};

/// Name of the palette every fallback resolves to.
pub const DEFAULT_PALETTE: &str = "default";

/// The palette section of a scene's variables.
///
/// Holds every named palette plus the optional name of the user's preferred
/// one. Build it from a raw document with [`Variables::from_value`] (or the
/// JSON/YAML loaders), or programmatically with the builder methods.
///
/// # Example
///
/// ```rust
/// use rvr_utils::{CollectingSink, Palette, Variables};
///
/// let vars = Variables::new()
///     .with_palette("default", Palette::new().with("primary", "#2196f3"))
///     .with_palette("night", Palette::new().with("primary", "#0d47a1"))
///     .with_user_palette("night");
///
/// let mut sink = CollectingSink::new();
/// let palette = vars.resolve(None, &mut sink).unwrap();
/// assert_eq!(palette.color("primary"), Some("#0d47a1"));
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    palettes: HashMap<String, Palette>,
    user_palette: Option<String>,
}

impl Variables {
    /// Creates a configuration with no palettes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and converts a raw variables document.
    ///
    /// The document must be a mapping with a `palettes` mapping inside it.
    /// Palette entries that are not mappings are skipped, so looking them
    /// up behaves like looking up a missing name. `userPalette` is kept only
    /// when it is a non-empty string.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = value.as_object().ok_or(InvalidInput::VariablesEmpty)?;
        let palettes = root
            .get("palettes")
            .and_then(Value::as_object)
            .ok_or(InvalidInput::PalettesNotObject)?;

        let palettes = palettes
            .iter()
            .filter_map(|(name, entry)| {
                entry
                    .as_object()
                    .map(|map| (name.clone(), Palette::from_map(map.clone())))
            })
            .collect();

        let user_palette = root
            .get("userPalette")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self {
            palettes,
            user_palette,
        })
    }

    /// Parses a JSON document, then validates it like [`Variables::from_value`].
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Parses a YAML document, then validates it like [`Variables::from_value`].
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(&value)
    }

    /// Adds a named palette, returning the updated configuration for chaining.
    pub fn with_palette(mut self, name: &str, palette: Palette) -> Self {
        self.palettes.insert(name.to_string(), palette);
        self
    }

    /// Sets the user's preferred palette name.
    pub fn with_user_palette(mut self, name: &str) -> Self {
        self.user_palette = Some(name.to_string()).filter(|n| !n.is_empty());
        self
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    pub fn has_palette(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    pub fn user_palette(&self) -> Option<&str> {
        self.user_palette.as_deref()
    }

    /// The `default` palette, if configured.
    pub fn default_palette(&self) -> Option<&Palette> {
        self.palettes.get(DEFAULT_PALETTE)
    }

    /// Selects a palette.
    ///
    /// With a non-empty `name`, returns that palette; a missing name reports
    /// an error-severity diagnostic and falls back to `default`. Without a
    /// name, returns the user palette; if it is unset or missing, reports a
    /// warning and falls back to `default`.
    ///
    /// Returns `None` only when the fallback itself is absent. No diagnostic
    /// is emitted for that case beyond the one describing the fallback.
    pub fn resolve<S>(&self, name: Option<&str>, sink: &mut S) -> Option<&Palette>
    where
        S: DiagnosticSink + ?Sized,
    {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            if let Some(palette) = self.palettes.get(name) {
                return Some(palette);
            }
            sink.report(Diagnostic::palette_not_found(name));
            return self.default_palette();
        }

        if let Some(palette) = self
            .user_palette
            .as_deref()
            .and_then(|user| self.palettes.get(user))
        {
            return Some(palette);
        }
        sink.report(Diagnostic::user_palette_undefined());
        self.default_palette()
    }
}

/// Resolves a palette straight from a raw variables document.
///
/// Structural validation always runs first, even when `name` is given, so a
/// malformed document fails with [`InvalidInput`] regardless of the request.
///
/// ```rust
/// use rvr_utils::{get_palette, NullSink};
/// use serde_json::json;
///
/// let variables = json!({
///     "palettes": { "default": { "primary": "#2196f3" } }
/// });
/// let palette = get_palette(&variables, None, &mut NullSink).unwrap().unwrap();
/// assert_eq!(palette.color("primary"), Some("#2196f3"));
/// ```
pub fn get_palette<S>(variables: &Value, name: Option<&str>, sink: &mut S) -> Result<Option<Palette>>
where
    S: DiagnosticSink + ?Sized,
{
    let variables = Variables::from_value(variables)?;
    Ok(variables.resolve(name, sink).cloned())
}
