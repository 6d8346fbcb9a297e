//! Error types for bundle export

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while filtering and exporting certificates
#[derive(Error, Debug)]
pub enum Error {
    /// A service carries no usable certificate bytes
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),

    /// The output sink rejected a write or flush
    #[error("Failed to write output: {0}")]
    OutputWrite(#[source] std::io::Error),

    /// Filter policy JSON error
    #[error("Invalid filter policy: {0}")]
    Policy(#[from] serde_json::Error),

    /// Filter policy file could not be read
    #[error("Failed to read filter policy {path:?}: {source}")]
    PolicyFile {
        /// Path of the policy file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for bundle export operations
pub type Result<T> = std::result::Result<T, Error>;
