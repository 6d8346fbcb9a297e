//! Error types for Trusted List operations

use thiserror::Error;

/// Errors that can occur while obtaining or walking a Trusted List
#[derive(Debug, Error)]
pub enum Error {
    /// XML parsing or text decoding error
    #[error("failed to parse XML data: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document is well-formed XML but not a Trusted List
    #[error("not a Trusted List: {0}")]
    NotATrustedList(String),

    /// I/O error while reading a local document
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error while downloading a remote document
    #[error("HTTP error: {0}")]
    Http(String),

    /// No remote source is configured for the country code
    #[error("unknown country \"{0}\" for remote fetch")]
    UnknownCountry(String),

    /// A service entry lacks a field or carries an unreadable value
    ///
    /// Never returned from a walk; the walker logs it and substitutes defaults.
    #[error("malformed service {service:?} of provider {provider:?}: {reason}")]
    MalformedService {
        /// Provider name
        provider: String,
        /// Service name
        service: String,
        /// What is wrong with the entry
        reason: String,
    },
}

/// Result type for Trusted List operations
pub type Result<T> = std::result::Result<T, Error>;
