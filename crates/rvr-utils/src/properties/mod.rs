//! Attribute trees and the applier that writes them to entities.
//!
//! This module provides:
//!
//! - [`PropertyTree`]: An ordered, possibly nested set of attributes
//! - [`PropertyValue`]: Explicit `Terminal` / `Nested` tagging of entries
//! - [`AttributeTarget`]: The flat and namespaced `setAttribute` capability
//! - [`apply_properties`]: Batch or incremental flattening onto a target

mod apply;
mod target;
mod tree;
mod value;

pub use apply::{apply_properties, ApplyMode};
pub use target::{AttributeCall, AttributeTarget};
pub use tree::PropertyTree;
pub use value::{PropertyValue, Vec3};
