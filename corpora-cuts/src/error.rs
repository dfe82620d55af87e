//! Error types for corpora-cuts organized by stage.

use std::path::PathBuf;
use thiserror::Error;

/// Cut manifest error variants organized by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest opening or reading error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Weighted multiplexing error
    #[error(transparent)]
    Mux(#[from] MuxError),
}

/// Errors raised while opening, reading or writing a manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file does not exist
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File name does not look like a JSON lines manifest
    #[error("unsupported manifest format: {} (expected .jsonl or .jsonl.gz)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// IO error while accessing the manifest
    #[error("failed to access manifest: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be decoded into a cut
    #[error("malformed cut at {}:{line}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A cut could not be encoded while writing
    #[error("failed to encode cut {id} for {}", path.display())]
    Encode {
        path: PathBuf,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Weighted multiplexing configuration errors.
#[derive(Debug, Error)]
pub enum MuxError {
    /// No sources given
    #[error("mux requires at least one source")]
    Empty,

    /// Weights do not line up with sources
    #[error("mux requires one weight per source: got {sources} sources and {weights} weights")]
    WeightsMismatch { sources: usize, weights: usize },

    /// Weight is negative, NaN or infinite
    #[error("invalid mux weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },
}

impl Error {
    /// Returns true if this error means a manifest file is missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Manifest(ManifestError::NotFound(_)) => true,
            Error::Manifest(ManifestError::Io { source, .. }) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Result type alias for corpora-cuts operations.
pub type Result<T> = std::result::Result<T, Error>;
