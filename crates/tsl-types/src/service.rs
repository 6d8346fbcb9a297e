//! Per-service record derived from a Trusted List

use crate::encoding::DerCertificate;
use crate::vocabulary::{Resolved, ServiceExtension, ServiceStatus, ServiceType};

/// A trust service with its metadata resolved to vocabulary labels
///
/// Produced once per `TSPService` while walking a document and consumed by
/// the filter. It carries no references into the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedService {
    /// Name of the trust service provider offering the service
    pub provider: String,

    /// Name of the service itself
    pub name: String,

    /// Resolved `ServiceTypeIdentifier`
    pub service_type: Resolved<ServiceType>,

    /// Resolved `ServiceStatus`
    pub status: Resolved<ServiceStatus>,

    /// Resolved `AdditionalServiceInformation` URIs, in document order
    pub extensions: Vec<Resolved<ServiceExtension>>,

    /// First certificate of the service digital identity (may be empty)
    pub certificate: DerCertificate,
}

impl ResolvedService {
    /// Create a record with the given type and status, no extensions and no certificate
    pub fn new(service_type: Resolved<ServiceType>, status: Resolved<ServiceStatus>) -> Self {
        Self {
            provider: String::new(),
            name: String::new(),
            service_type,
            status,
            extensions: Vec::new(),
            certificate: DerCertificate::default(),
        }
    }

    /// Set the provider name
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the service name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a resolved extension
    pub fn with_extension(mut self, extension: Resolved<ServiceExtension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Set the embedded certificate
    pub fn with_certificate(mut self, certificate: impl Into<DerCertificate>) -> Self {
        self.certificate = certificate.into();
        self
    }

    /// Whether any extension resolved to `extension`
    pub fn has_extension(&self, extension: ServiceExtension) -> bool {
        self.extensions.iter().any(|ext| ext.is(extension))
    }

    /// Whether the service carries certificate bytes
    pub fn has_certificate(&self) -> bool {
        !self.certificate.is_empty()
    }
}
