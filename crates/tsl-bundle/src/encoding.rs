//! PEM encoding of trust anchors

use crate::error::{Error, Result};
use pem::{EncodeConfig, LineEnding, Pem};
use x509_cert::der::Decode;
use x509_cert::Certificate;

/// PEM label of an X.509 certificate block
pub const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Wrap DER certificate bytes in a `CERTIFICATE` PEM block
///
/// The body is wrapped at 64 columns with `\n` line endings and the block
/// ends with a newline after the footer, so blocks can be concatenated.
pub fn encode_certificate(der: &[u8]) -> Result<String> {
    if der.is_empty() {
        return Err(Error::InvalidCertificate(
            "no certificate bytes to encode".to_string(),
        ));
    }
    let block = Pem::new(CERTIFICATE_TAG, der.to_vec());
    Ok(pem::encode_config(
        &block,
        EncodeConfig::new().set_line_ending(LineEnding::LF),
    ))
}

/// Subject distinguished name of a DER certificate
pub fn describe_certificate(der: &[u8]) -> Result<String> {
    let cert = Certificate::from_der(der)
        .map_err(|e| Error::InvalidCertificate(format!("failed to parse certificate: {}", e)))?;
    Ok(cert.tbs_certificate.subject.to_string())
}
