//! Error types.
//!
//! Only structural problems are errors. A palette lookup that falls back to
//! the `default` entry is reported through a
//! [`DiagnosticSink`](crate::DiagnosticSink) instead.

/// Structural validation failures for a palette configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The configuration is missing or is not a mapping.
    #[error("variables are empty")]
    VariablesEmpty,
    /// `palettes` is missing or is not a mapping.
    #[error("palettes is undefined in variables, or is not an object")]
    PalettesNotObject,
}

/// Errors returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// A configuration document could not be parsed.
    #[error("failed to parse {format} configuration: {message}")]
    Config {
        format: &'static str,
        message: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config {
            format: "YAML",
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
