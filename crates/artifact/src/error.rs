//! Artifact error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact operations
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Errors that can occur while locating or loading artifacts
///
/// All of these are fatal at startup: the service must not begin serving
/// without a usable model.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// No filename in the directory matched the model suffix
    #[error("No model artifact matching '*{suffix}' found in {dir}", suffix = crate::locate::MODEL_SUFFIX, dir = .dir.display())]
    ModelNotFound { dir: PathBuf },

    /// Filesystem error while enumerating or reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact file exists but does not deserialize
    #[error("Failed to parse artifact {path}: {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
