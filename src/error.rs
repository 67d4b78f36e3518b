//! Error types for reading, rendering and writing toques.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures. Anything wrong inside the notation itself is not an
/// error; see [`crate::diagnostics`] for those.
#[derive(Debug, Error)]
pub enum ToqueError {
    /// Input file missing, unreadable or not UTF-8
    #[error("Failed to read file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template rendering failed: {0}")]
    Template(#[from] mustache::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
