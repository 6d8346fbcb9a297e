//! Error types for tsl-types

use thiserror::Error;

/// Errors that can occur in tsl-types
#[derive(Error, Debug)]
pub enum Error {
    /// Base64 decoding error
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A label name that is not part of the vocabulary
    #[error("Unknown {kind} label: {name}")]
    UnknownLabel {
        /// Vocabulary the name was looked up in
        kind: &'static str,
        /// The rejected name
        name: String,
    },
}

/// Result type for tsl-types operations
pub type Result<T> = std::result::Result<T, Error>;
