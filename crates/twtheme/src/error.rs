//! Error types for catalog loading and theme export.

use std::path::PathBuf;

/// Error returned when a style catalog cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read style catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid style catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned when rendering export rows fails.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize theme object: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error returned when a textual option (format name, row kind) is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseOptionError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}
