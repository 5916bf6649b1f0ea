//! Error types for page generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while generating a source page.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Output {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying system error.
        #[source]
        source: std::io::Error,
    },

    /// An annotation list could not be decoded.
    #[error("failed to decode annotations: {0}")]
    Annotations(#[from] serde_json::Error),
}
