//! Error types for canvas-flow.
//!
//! The ordering and rendering core is infallible; errors only come from
//! reading and decoding the input document or encoding the output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("unknown output format '{0}'; use html or json")]
    UnknownFormat(String),
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode render output: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias for canvas-level results.
pub type Result<T> = std::result::Result<T, CanvasError>;
