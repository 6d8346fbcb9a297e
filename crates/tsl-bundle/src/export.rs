//! Single-pass export of accepted services into a PEM bundle

use crate::encoding::{describe_certificate, encode_certificate};
use crate::error::{Error, Result};
use crate::policy::FilterPolicy;
use std::fmt;
use std::io::Write;
use tsl_types::ResolvedService;

/// Counters collected while exporting
///
/// `exported + discarded` equals the number of services visited.
/// `invalid_certificates` is the part of `discarded` that matched the
/// policy but had no certificate to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Certificates written to the sink
    pub exported: usize,
    /// Services not written (filtered out or invalid certificate)
    pub discarded: usize,
    /// Accepted services discarded for lack of a usable certificate
    pub invalid_certificates: usize,
}

impl ExportReport {
    /// Number of services visited
    pub fn total(&self) -> usize {
        self.exported + self.discarded
    }

    /// Services discarded by the policy itself
    pub fn filtered(&self) -> usize {
        self.discarded - self.invalid_certificates
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} certificate(s), {} discarded",
            self.exported, self.discarded
        )
    }
}

/// Exports the certificates of accepted services
///
/// Each call to [`export`](Self::export) is independent: it streams every
/// service once, writes accepted certificates in input order and flushes the
/// sink at the end. Sink failures abort the pass; bytes already written are
/// left in place.
#[derive(Debug, Clone, Default)]
pub struct BundleExporter {
    policy: FilterPolicy,
}

impl BundleExporter {
    /// Create an exporter for a policy
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    /// Policy in use
    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Filter `services` and write accepted certificates to `sink`
    pub fn export<I, W>(&self, services: I, sink: &mut W) -> Result<ExportReport>
    where
        I: IntoIterator<Item = ResolvedService>,
        W: Write + ?Sized,
    {
        let mut report = ExportReport::default();

        for service in services {
            if !self.policy.accepts(&service) {
                tracing::debug!(
                    provider = %service.provider,
                    service = %service.name,
                    service_type = %service.service_type,
                    status = %service.status,
                    "discarding (filtered)"
                );
                report.discarded += 1;
                continue;
            }

            let block = match encode_certificate(service.certificate.as_bytes()) {
                Ok(block) => block,
                Err(e) => {
                    tracing::warn!(
                        provider = %service.provider,
                        service = %service.name,
                        "discarding accepted service: {}",
                        e
                    );
                    report.discarded += 1;
                    report.invalid_certificates += 1;
                    continue;
                }
            };

            match describe_certificate(service.certificate.as_bytes()) {
                Ok(subject) => tracing::debug!(
                    provider = %service.provider,
                    "exporting trusted cert: {}",
                    subject
                ),
                Err(e) => tracing::warn!(
                    provider = %service.provider,
                    service = %service.name,
                    "exporting certificate that is not valid X.509: {}",
                    e
                ),
            }

            sink.write_all(block.as_bytes()).map_err(Error::OutputWrite)?;
            report.exported += 1;
        }

        sink.flush().map_err(Error::OutputWrite)?;
        Ok(report)
    }
}

/// Filter `services` with `policy` and write accepted certificates to `sink`
pub fn export_bundle<I, W>(
    services: I,
    policy: &FilterPolicy,
    sink: &mut W,
) -> Result<ExportReport>
where
    I: IntoIterator<Item = ResolvedService>,
    W: Write + ?Sized,
{
    BundleExporter::new(policy.clone()).export(services, sink)
}
