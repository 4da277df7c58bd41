//! # rvr-utils - Scene entity helpers
//!
//! Small, stateless helpers for building 3D/AR scenes out of entities whose
//! components are configured through `setAttribute`.
//!
//! ## Palettes
//!
//! A scene's variables hold named color/opacity [`Palette`]s plus the name of
//! the user's preferred one. [`Variables::resolve`] picks one, falling back to
//! the `default` palette and reporting the fallback to a [`DiagnosticSink`]:
//!
//! ```rust
//! use rvr_utils::{CollectingSink, Severity, Variables};
//!
//! let vars = Variables::from_json_str(r##"{
//!     "palettes": {
//!         "default": { "primary": "#2196f3", "opacity": 0.9 },
//!         "night":   { "primary": "#0d47a1", "opacity": 0.7 }
//!     }
//! }"##).unwrap();
//!
//! let mut sink = CollectingSink::new();
//! let palette = vars.resolve(Some("neon"), &mut sink).unwrap();
//!
//! assert_eq!(palette.color("primary"), Some("#2196f3"));
//! assert_eq!(sink.count(Severity::Error), 1);
//! ```
//!
//! ## Attribute trees
//!
//! A [`PropertyTree`] describes attributes to write to an [`AttributeTarget`].
//! Entries are explicitly tagged as terminal values or nested component trees,
//! and [`apply_properties`] writes them either all at once
//! ([`ApplyMode::Batch`]) or leaf by leaf with namespaced writes
//! ([`ApplyMode::Incremental`]):
//!
//! ```rust
//! use rvr_utils::{create_entity, PropertyTree};
//! use serde_json::json;
//!
//! let mut entity = create_entity(Some("a-box"), Some(
//!     &PropertyTree::new()
//!         .vector("position", 0.0, 1.0, -2.0)
//!         .nest("material", PropertyTree::new().set("color", "red").set("opacity", 1.0)),
//! ));
//!
//! entity.update(&PropertyTree::new().nest("material", PropertyTree::new().set("opacity", 0.5)));
//!
//! assert_eq!(entity.attribute("material"), Some(&json!({"color": "red", "opacity": 0.5})));
//! ```
//!
//! ## Other helpers
//!
//! - [`mixin`]: shallow merge of JSON objects
//! - [`ClassList`], [`transfer_classes`]: CSS class bookkeeping
//! - [`serialize_query`], [`parse_query`]: URL query strings
//! - [`SyntheticEvent`], [`emit`]: custom events for an [`EventTarget`]
//! - [`guid`]: random identifiers

pub mod classes;
pub mod diagnostics;
pub mod entity;
mod error;
pub mod event;
pub mod guid;
mod mixin;
pub mod palette;
pub mod properties;
pub mod query;

pub use classes::{copy_classes, transfer_classes, ClassList};
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, Severity, TracingSink,
};
pub use entity::{create_entity, Entity, DEFAULT_ENTITY_TAG, PRIMITIVE_PREFIX};
pub use error::{Error, InvalidInput, Result};
pub use event::{emit, EventTarget, SyntheticEvent};
pub use guid::{guid, short_guid};
pub use mixin::mixin;
pub use palette::{get_palette, Palette, Variables, DEFAULT_PALETTE};
pub use properties::{
    apply_properties, ApplyMode, AttributeCall, AttributeTarget, PropertyTree, PropertyValue,
    Vec3,
};
pub use query::{parse_query, query_to_map, serialize_query};
