//! Type-safe wrapper for embedded certificate data
//!
//! Trusted Lists embed X.509 certificates as base64 text. This module keeps
//! the decoded DER bytes in a dedicated newtype so they cannot be confused
//! with the textual form.

use crate::error::Result;
use base64::Engine;

/// A DER-encoded X.509 certificate
///
/// The wrapper may be empty: a service without an embedded certificate is
/// still a valid record, it just cannot be exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerCertificate(Vec<u8>);

impl DerCertificate {
    /// Create from DER bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode from the base64 text found in an `X509Certificate` element
    ///
    /// Whitespace (line breaks, indentation) is stripped before decoding.
    pub fn from_base64(text: &str) -> Result<Self> {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
        Ok(Self(bytes))
    }

    /// Encode as standard base64 without line breaks
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to owned bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Get the length of the encoded data
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no certificate bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for DerCertificate {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for DerCertificate {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for DerCertificate {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
