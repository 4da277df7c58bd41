//! Recoverable diagnostics.
//!
//! Palette resolution never logs on its own. Every fallback is described by
//! a [`Diagnostic`] handed to a caller-supplied [`DiagnosticSink`]:
//!
//! - [`TracingSink`] forwards to `tracing` (what production code wants)
//! - [`CollectingSink`] keeps diagnostics for later inspection
//! - [`NullSink`] drops them
//!
//! Any `FnMut(&Diagnostic)` closure is also a sink.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What triggered a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An explicitly requested palette does not exist.
    PaletteNotFound { requested: String },
    /// No usable user palette is configured.
    UserPaletteUndefined,
}

/// A recoverable condition reported during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn palette_not_found(requested: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::PaletteNotFound {
                requested: requested.to_string(),
            },
            message: format!(
                "Palette \"{}\" doesn't exist, will use a default one instead",
                requested
            ),
        }
    }

    pub(crate) fn user_palette_undefined() -> Self {
        Self {
            severity: Severity::Warn,
            kind: DiagnosticKind::UserPaletteUndefined,
            message: "User palette is not defined, will use a default one instead".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Receives diagnostics emitted by this crate.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(&diagnostic)
    }
}

/// Forwards diagnostics to the `tracing` macros matching their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match (&diagnostic.severity, &diagnostic.kind) {
            (Severity::Error, DiagnosticKind::PaletteNotFound { requested }) => {
                tracing::error!(palette = %requested, "{}", diagnostic.message)
            }
            (Severity::Error, _) => tracing::error!("{}", diagnostic.message),
            (Severity::Warn, _) => tracing::warn!("{}", diagnostic.message),
        }
    }
}

/// Stores every diagnostic it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of collected diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Discards diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
