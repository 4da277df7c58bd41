//! Palette system for color/opacity themes.
//!
//! This module provides:
//!
//! - [`Palette`]: A flat mapping of semantic keys to colors and opacities
//! - [`Variables`]: The configured palettes plus the user's preferred one
//! - [`get_palette`]: One-shot resolution straight from a raw document
//!
//! Resolution falls back to the [`DEFAULT_PALETTE`] entry whenever the
//! request cannot be satisfied, reporting why through a
//! [`DiagnosticSink`](crate::DiagnosticSink).

#[allow(clippy::module_inception)]
mod palette;
mod variables;

pub use palette::Palette;
pub use variables::{get_palette, Variables, DEFAULT_PALETTE};
