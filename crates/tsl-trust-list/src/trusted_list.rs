//! Trusted List document model and service walker
//!
//! The document is read with a streaming XML reader into a small tree that
//! keeps only what the walker needs. Element text is stored exactly as it
//! appears in the document: no trimming, no case folding.

use crate::{Error, Result};
use quick_xml::errors::IllFormedError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;
use tsl_types::{
    DerCertificate, Resolved, ResolvedService, ServiceExtension, ServiceStatus, ServiceType,
    Vocabulary,
};

/// Local name of the document element
pub const ROOT_ELEMENT: &str = "TrustServiceStatusList";

/// A parsed Trusted List (`TrustServiceStatusList`)
///
/// Only the elements needed to resolve services are kept; everything else
/// (scheme information, signature, service history) is skipped while parsing.
/// Every element is optional so that a partially malformed list still loads.
#[derive(Debug, Clone, Default)]
pub struct TrustedList {
    /// List of trust service providers
    pub provider_list: TrustServiceProviderList,
}

/// Container of trust service providers
#[derive(Debug, Clone, Default)]
pub struct TrustServiceProviderList {
    /// Providers in document order
    pub providers: Vec<TrustServiceProvider>,
}

/// A trust service provider (`TrustServiceProvider`)
#[derive(Debug, Clone, Default)]
pub struct TrustServiceProvider {
    /// Provider information
    pub information: TspInformation,

    /// Services offered by the provider
    pub services: TspServices,
}

/// Provider information (`TSPInformation`)
#[derive(Debug, Clone, Default)]
pub struct TspInformation {
    /// Registered provider name, possibly in several languages
    pub name: MultiLangName,
}

/// Container of services (`TSPServices`)
#[derive(Debug, Clone, Default)]
pub struct TspServices {
    /// Services in document order
    pub services: Vec<TspService>,
}

/// A single trust service (`TSPService`)
#[derive(Debug, Clone, Default)]
pub struct TspService {
    /// Current service information
    pub information: Option<ServiceInformation>,
}

/// Current information about a service (`ServiceInformation`)
#[derive(Debug, Clone, Default)]
pub struct ServiceInformation {
    /// Service type URI
    pub type_identifier: Option<String>,

    /// Service name
    pub name: MultiLangName,

    /// Digital identity (certificates, subject names, key identifiers)
    pub digital_identity: ServiceDigitalIdentity,

    /// Service status URI
    pub status: Option<String>,

    /// Service information extensions
    pub extensions: ServiceInformationExtensions,
}

/// A name given in one or more languages
#[derive(Debug, Clone, Default)]
pub struct MultiLangName {
    /// Names in document order
    pub names: Vec<String>,
}

impl MultiLangName {
    /// The first name given, or an empty string
    pub fn first(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

/// Digital identity of a service (`ServiceDigitalIdentity`)
#[derive(Debug, Clone, Default)]
pub struct ServiceDigitalIdentity {
    /// Identifiers in document order
    pub digital_ids: Vec<DigitalId>,
}

/// One digital identifier (`DigitalId`)
#[derive(Debug, Clone, Default)]
pub struct DigitalId {
    /// Base64 `X509Certificate` values
    pub certificates: Vec<String>,
}

/// Extensions container (`ServiceInformationExtensions`)
#[derive(Debug, Clone, Default)]
pub struct ServiceInformationExtensions {
    /// Extensions in document order
    pub extensions: Vec<Extension>,
}

/// A service information extension (`Extension`)
///
/// Only `AdditionalServiceInformation` is read; qualification and
/// take-over extensions are ignored.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    /// Additional service information, if this extension carries one
    pub additional_information: Option<AdditionalServiceInformation>,
}

/// Additional service information (`AdditionalServiceInformation`)
#[derive(Debug, Clone, Default)]
pub struct AdditionalServiceInformation {
    /// Information URI
    pub uri: Option<String>,
}

/// Element text the walker keeps
#[derive(Debug, Clone, Copy)]
enum Field {
    ProviderName,
    ServiceType,
    ServiceName,
    Certificate,
    Status,
    ExtensionUri,
}

/// What an element opens, given its path below the document element
#[derive(Debug, Clone, Copy)]
enum Node {
    Provider,
    Service,
    Information,
    DigitalId,
    Extension,
    AdditionalInformation,
    Text(Field),
}

impl Node {
    fn classify(path: &[&str]) -> Option<Self> {
        let service_info = match path {
            ["TrustServiceProviderList", "TrustServiceProvider"] => return Some(Node::Provider),
            ["TrustServiceProviderList", "TrustServiceProvider", "TSPInformation", "TSPName", "Name"] => {
                return Some(Node::Text(Field::ProviderName))
            }
            ["TrustServiceProviderList", "TrustServiceProvider", "TSPServices", "TSPService"] => {
                return Some(Node::Service)
            }
            ["TrustServiceProviderList", "TrustServiceProvider", "TSPServices", "TSPService", "ServiceInformation", rest @ ..] => {
                rest
            }
            _ => return None,
        };

        // Below ServiceInformation; history instances never reach here
        match service_info {
            [] => Some(Node::Information),
            ["ServiceTypeIdentifier"] => Some(Node::Text(Field::ServiceType)),
            ["ServiceName", "Name"] => Some(Node::Text(Field::ServiceName)),
            ["ServiceDigitalIdentity", "DigitalId"] => Some(Node::DigitalId),
            ["ServiceDigitalIdentity", "DigitalId", "X509Certificate"] => {
                Some(Node::Text(Field::Certificate))
            }
            ["ServiceStatus"] => Some(Node::Text(Field::Status)),
            ["ServiceInformationExtensions", "Extension"] => Some(Node::Extension),
            ["ServiceInformationExtensions", "Extension", "AdditionalServiceInformation"] => {
                Some(Node::AdditionalInformation)
            }
            ["ServiceInformationExtensions", "Extension", "AdditionalServiceInformation", "URI"] => {
                Some(Node::Text(Field::ExtensionUri))
            }
            _ => None,
        }
    }
}

/// Text being collected for a field, with the depth of its element
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

impl TrustedList {
    /// Parse a Trusted List from XML text
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::read(Reader::from_str(xml))
    }

    /// Parse a Trusted List from raw bytes
    ///
    /// Text is decoded with the encoding named in the XML declaration,
    /// UTF-8 when none is declared.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read(Reader::from_reader(bytes))
    }

    /// Load a Trusted List from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    fn read<R: BufRead>(mut reader: Reader<R>) -> Result<Self> {
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.trim_text(false);

        let mut list = TrustedList::default();
        let mut stack: Vec<String> = Vec::new();
        let mut capture: Option<Capture> = None;
        let mut seen_root = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let name = reader.decoder().decode(e.local_name().into_inner())?;
                    if stack.is_empty() {
                        if seen_root || name != ROOT_ELEMENT {
                            return Err(Error::NotATrustedList(format!(
                                "unexpected top-level element <{}>",
                                name
                            )));
                        }
                        seen_root = true;
                    }
                    stack.push(name.into_owned());

                    let path: Vec<&str> = stack[1..].iter().map(String::as_str).collect();
                    match Node::classify(&path) {
                        Some(Node::Text(field)) if capture.is_none() => {
                            capture = Some(Capture {
                                field,
                                depth: stack.len(),
                                text: String::new(),
                            });
                        }
                        Some(Node::Text(_)) | None => {}
                        Some(node) => list.open(node),
                    }
                }
                Event::Text(e) => {
                    if let Some(capture) = capture.as_mut().filter(|c| c.depth == stack.len()) {
                        capture.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(capture) = capture.as_mut().filter(|c| c.depth == stack.len()) {
                        capture.text.push_str(&reader.decoder().decode(&e.into_inner())?);
                    }
                }
                Event::End(_) => {
                    if capture.as_ref().is_some_and(|c| c.depth == stack.len()) {
                        if let Some(done) = capture.take() {
                            list.store(done.field, done.text);
                        }
                    }
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.pop() {
            return Err(Error::Xml(IllFormedError::MissingEndTag(open).into()));
        }
        if !seen_root {
            return Err(Error::NotATrustedList("no document element".to_string()));
        }
        Ok(list)
    }

    fn current_provider(&mut self) -> Option<&mut TrustServiceProvider> {
        self.provider_list.providers.last_mut()
    }

    fn current_service(&mut self) -> Option<&mut TspService> {
        self.current_provider()?.services.services.last_mut()
    }

    fn current_information(&mut self) -> Option<&mut ServiceInformation> {
        self.current_service()?.information.as_mut()
    }

    fn open(&mut self, node: Node) {
        match node {
            Node::Provider => self.provider_list.providers.push(Default::default()),
            Node::Service => {
                if let Some(provider) = self.current_provider() {
                    provider.services.services.push(Default::default());
                }
            }
            Node::Information => {
                if let Some(service) = self.current_service() {
                    service.information.get_or_insert_with(Default::default);
                }
            }
            Node::DigitalId => {
                if let Some(info) = self.current_information() {
                    info.digital_identity.digital_ids.push(Default::default());
                }
            }
            Node::Extension => {
                if let Some(info) = self.current_information() {
                    info.extensions.extensions.push(Default::default());
                }
            }
            Node::AdditionalInformation => {
                if let Some(extension) = self
                    .current_information()
                    .and_then(|info| info.extensions.extensions.last_mut())
                {
                    extension
                        .additional_information
                        .get_or_insert_with(Default::default);
                }
            }
            Node::Text(_) => {}
        }
    }

    /// Keep captured text; single-valued fields keep their first occurrence
    fn store(&mut self, field: Field, text: String) {
        match field {
            Field::ProviderName => {
                if let Some(provider) = self.current_provider() {
                    provider.information.name.names.push(text);
                }
            }
            Field::ServiceType => {
                if let Some(info) = self.current_information() {
                    info.type_identifier.get_or_insert(text);
                }
            }
            Field::ServiceName => {
                if let Some(info) = self.current_information() {
                    info.name.names.push(text);
                }
            }
            Field::Certificate => {
                if let Some(id) = self
                    .current_information()
                    .and_then(|info| info.digital_identity.digital_ids.last_mut())
                {
                    id.certificates.push(text);
                }
            }
            Field::Status => {
                if let Some(info) = self.current_information() {
                    info.status.get_or_insert(text);
                }
            }
            Field::ExtensionUri => {
                if let Some(additional) = self
                    .current_information()
                    .and_then(|info| info.extensions.extensions.last_mut())
                    .and_then(|ext| ext.additional_information.as_mut())
                {
                    additional.uri.get_or_insert(text);
                }
            }
        }
    }

    /// Providers in document order
    pub fn providers(&self) -> &[TrustServiceProvider] {
        &self.provider_list.providers
    }

    /// Total number of services across all providers
    pub fn service_count(&self) -> usize {
        self.providers()
            .iter()
            .map(|provider| provider.services.services.len())
            .sum()
    }

    /// Walk every service in provider-then-service order
    ///
    /// The iterator is lazy and forward-only. Missing or unreadable fields
    /// never stop the walk: they resolve to `Unknown` or an empty certificate.
    pub fn services(&self) -> impl Iterator<Item = ResolvedService> + '_ {
        self.providers().iter().flat_map(|provider| {
            let provider_name = provider.name().to_string();
            tracing::debug!(provider = %provider_name, "walking provider");
            provider
                .services
                .services
                .iter()
                .map(move |service| service.resolve(&provider_name))
        })
    }
}

impl TrustServiceProvider {
    /// First registered name of the provider
    pub fn name(&self) -> &str {
        self.information.name.first()
    }
}

impl TspService {
    /// Resolve this service's metadata against the vocabulary tables
    pub fn resolve(&self, provider: &str) -> ResolvedService {
        let Some(info) = &self.information else {
            report_malformed(provider, "", "missing ServiceInformation");
            return ResolvedService::new(
                Resolved::Unknown(String::new()),
                Resolved::Unknown(String::new()),
            )
            .with_provider(provider);
        };
        let name = info.name.first();

        let service_type = match &info.type_identifier {
            Some(uri) => ServiceType::resolve(uri),
            None => {
                report_malformed(provider, name, "missing ServiceTypeIdentifier");
                Resolved::Unknown(String::new())
            }
        };

        let status = match &info.status {
            Some(uri) => ServiceStatus::resolve(uri),
            None => {
                report_malformed(provider, name, "missing ServiceStatus");
                Resolved::Unknown(String::new())
            }
        };

        tracing::trace!(
            provider,
            service = name,
            %service_type,
            %status,
            "resolved service"
        );

        let mut resolved = ResolvedService::new(service_type, status)
            .with_provider(provider)
            .with_name(name);

        for additional in info
            .extensions
            .extensions
            .iter()
            .filter_map(|ext| ext.additional_information.as_ref())
        {
            let uri = additional.uri.as_deref().unwrap_or_default();
            let extension = ServiceExtension::resolve(uri);
            tracing::trace!(service = name, %extension, "service extension");
            resolved = resolved.with_extension(extension);
        }

        let first_certificate = info
            .digital_identity
            .digital_ids
            .iter()
            .flat_map(|id| id.certificates.iter())
            .next();

        match first_certificate {
            Some(text) => match DerCertificate::from_base64(text) {
                Ok(certificate) => resolved.with_certificate(certificate),
                Err(e) => {
                    report_malformed(
                        provider,
                        name,
                        &format!("undecodable X509Certificate: {}", e),
                    );
                    resolved
                }
            },
            None => {
                report_malformed(provider, name, "no X509Certificate in digital identity");
                resolved
            }
        }
    }
}

fn report_malformed(provider: &str, service: &str, reason: &str) {
    let error = Error::MalformedService {
        provider: provider.to_string(),
        service: service.to_string(),
        reason: reason.to_string(),
    };
    tracing::debug!("{}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CA_QC: &str = "http://uri.etsi.org/TrstSvc/Svctype/CA/QC";
    const GRANTED: &str = "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/granted";
    const WITHDRAWN: &str = "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/withdrawn";
    const FOR_ESIG: &str = "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSignatures";
    const FOR_ESEALS: &str = "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSeals";

    fn sample_list() -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<TrustServiceStatusList xmlns="http://uri.etsi.org/02231/v2#" TSLTag="http://uri.etsi.org/19612/TSLTag">
  <SchemeInformation>
    <TSLVersionIdentifier>5</TSLVersionIdentifier>
  </SchemeInformation>
  <TrustServiceProviderList>
    <TrustServiceProvider>
      <TSPInformation>
        <TSPName>
          <Name xml:lang="en">Example Trust S.p.A.</Name>
          <Name xml:lang="it">Example Trust S.p.A. (IT)</Name>
        </TSPName>
        <TSPTradeName>
          <Name xml:lang="en">VATIT-00000000000</Name>
        </TSPTradeName>
      </TSPInformation>
      <TSPServices>
        <TSPService>
          <ServiceInformation>
            <ServiceTypeIdentifier>{CA_QC}</ServiceTypeIdentifier>
            <ServiceName>
              <Name xml:lang="en">Example Qualified CA</Name>
            </ServiceName>
            <ServiceDigitalIdentity>
              <DigitalId>
                <X509Certificate>
                  YWJj
                  ZA==
                </X509Certificate>
              </DigitalId>
              <DigitalId>
                <X509SubjectName>CN=Example Qualified CA</X509SubjectName>
              </DigitalId>
            </ServiceDigitalIdentity>
            <ServiceStatus>{GRANTED}</ServiceStatus>
            <StatusStartingTime>2016-06-30T22:00:00Z</StatusStartingTime>
            <ServiceInformationExtensions>
              <Extension Critical="true">
                <Qualifications>
                  <QualificationElement/>
                </Qualifications>
              </Extension>
              <Extension Critical="true">
                <AdditionalServiceInformation>
                  <URI xml:lang="en">{FOR_ESIG}</URI>
                </AdditionalServiceInformation>
              </Extension>
              <Extension Critical="true">
                <AdditionalServiceInformation>
                  <URI xml:lang="en">{FOR_ESEALS}</URI>
                </AdditionalServiceInformation>
              </Extension>
            </ServiceInformationExtensions>
          </ServiceInformation>
          <ServiceHistory>
            <ServiceHistoryInstance>
              <ServiceTypeIdentifier>{CA_QC}</ServiceTypeIdentifier>
              <ServiceStatus>{WITHDRAWN}</ServiceStatus>
            </ServiceHistoryInstance>
          </ServiceHistory>
        </TSPService>
        <TSPService>
          <ServiceInformation>
            <ServiceTypeIdentifier>http://uri.etsi.org/TrstSvc/Svctype/Example</ServiceTypeIdentifier>
            <ServiceName>
              <Name xml:lang="en">Example Custom Service</Name>
            </ServiceName>
            <ServiceStatus>{WITHDRAWN}</ServiceStatus>
          </ServiceInformation>
        </TSPService>
      </TSPServices>
    </TrustServiceProvider>
    <TrustServiceProvider>
      <TSPInformation>
        <TSPName>
          <Name xml:lang="en">Second Provider</Name>
        </TSPName>
      </TSPInformation>
      <TSPServices>
        <TSPService/>
      </TSPServices>
    </TrustServiceProvider>
  </TrustServiceProviderList>
</TrustServiceStatusList>"#
        )
    }

    #[test]
    fn test_parse_trusted_list() {
        let list = TrustedList::from_xml(&sample_list()).unwrap();
        assert_eq!(list.providers().len(), 2);
        assert_eq!(list.providers()[0].name(), "Example Trust S.p.A.");
        assert_eq!(list.providers()[1].name(), "Second Provider");
        assert_eq!(list.service_count(), 3);
    }

    #[test]
    fn test_walk_resolves_labels() {
        let list = TrustedList::from_xml(&sample_list()).unwrap();
        let services: Vec<_> = list.services().collect();
        assert_eq!(services.len(), 3);

        let qc = &services[0];
        assert_eq!(qc.provider, "Example Trust S.p.A.");
        assert_eq!(qc.name, "Example Qualified CA");
        assert!(qc.service_type.is(ServiceType::CaQc));
        assert!(qc.status.is(ServiceStatus::Granted));
        assert_eq!(
            qc.extensions,
            vec![
                Resolved::Known(ServiceExtension::ESignatures),
                Resolved::Known(ServiceExtension::ESeals),
            ]
        );
        assert_eq!(qc.certificate.as_bytes(), b"abcd");
    }

    #[test]
    fn test_walk_unknown_type_and_missing_certificate() {
        let list = TrustedList::from_xml(&sample_list()).unwrap();
        let custom = list.services().nth(1).unwrap();
        assert_eq!(
            custom.service_type,
            Resolved::Unknown("http://uri.etsi.org/TrstSvc/Svctype/Example".to_string())
        );
        assert!(custom.status.is(ServiceStatus::Withdrawn));
        assert!(custom.extensions.is_empty());
        assert!(custom.certificate.is_empty());
    }

    #[test]
    fn test_walk_empty_service_defaults() {
        let list = TrustedList::from_xml(&sample_list()).unwrap();
        let empty = list.services().last().unwrap();
        assert_eq!(empty.provider, "Second Provider");
        assert!(empty.service_type.is_unknown());
        assert!(empty.status.is_unknown());
        assert!(empty.extensions.is_empty());
        assert!(!empty.has_certificate());
    }

    #[test]
    fn test_walk_undecodable_certificate() {
        let xml = format!(
            r#"<TrustServiceStatusList>
  <TrustServiceProviderList>
    <TrustServiceProvider>
      <TSPServices>
        <TSPService>
          <ServiceInformation>
            <ServiceTypeIdentifier>{CA_QC}</ServiceTypeIdentifier>
            <ServiceDigitalIdentity>
              <DigitalId><X509Certificate>%%%not-base64%%%</X509Certificate></DigitalId>
            </ServiceDigitalIdentity>
            <ServiceStatus>{GRANTED}</ServiceStatus>
          </ServiceInformation>
        </TSPService>
      </TSPServices>
    </TrustServiceProvider>
  </TrustServiceProviderList>
</TrustServiceStatusList>"#
        );
        let list = TrustedList::from_xml(&xml).unwrap();
        let services: Vec<_> = list.services().collect();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].provider, "");
        assert!(services[0].service_type.is(ServiceType::CaQc));
        assert!(services[0].certificate.is_empty());
    }

    #[test]
    fn test_extension_without_uri_is_unknown() {
        let xml = r#"<TrustServiceStatusList>
  <TrustServiceProviderList>
    <TrustServiceProvider>
      <TSPServices>
        <TSPService>
          <ServiceInformation>
            <ServiceInformationExtensions>
              <Extension Critical="false">
                <AdditionalServiceInformation>
                  <InformationValue>free text</InformationValue>
                </AdditionalServiceInformation>
              </Extension>
            </ServiceInformationExtensions>
          </ServiceInformation>
        </TSPService>
      </TSPServices>
    </TrustServiceProvider>
  </TrustServiceProviderList>
</TrustServiceStatusList>"#;
        let list = TrustedList::from_xml(xml).unwrap();
        let service = list.services().next().unwrap();
        assert_eq!(service.extensions, vec![Resolved::Unknown(String::new())]);
    }

    #[test]
    fn test_empty_list() {
        let list = TrustedList::from_xml("<TrustServiceStatusList/>").unwrap();
        assert_eq!(list.services().count(), 0);
    }

    #[test]
    fn test_invalid_xml() {
        let result = TrustedList::from_xml(
            "<TrustServiceStatusList><TrustServiceProviderList></TrustServiceStatusList>",
        );
        assert!(matches!(result, Err(Error::Xml(_))));
    }

    #[test]
    fn test_undecodable_bytes() {
        let result = TrustedList::from_bytes(&[0x3c, 0xff, 0xfe, 0x3e]);
        assert!(matches!(result, Err(Error::Xml(_))));
    }

    #[test]
    fn test_truncated_document() {
        let result = TrustedList::from_xml(
            "<TrustServiceStatusList><TrustServiceProviderList><TrustServiceProvider>",
        );
        assert!(matches!(result, Err(Error::Xml(_))));
    }

    #[test]
    fn test_not_a_trusted_list() {
        let html = TrustedList::from_xml("<html><body>Service unavailable</body></html>");
        assert!(matches!(html, Err(Error::NotATrustedList(_))));

        let empty = TrustedList::from_xml("");
        assert!(matches!(empty, Err(Error::NotATrustedList(_))));
    }

    fn single_service(service_information: &str) -> String {
        format!(
            r#"<TrustServiceStatusList>
  <TrustServiceProviderList>
    <TrustServiceProvider>
      <TSPServices>
        <TSPService>
          <ServiceInformation>{service_information}</ServiceInformation>
        </TSPService>
      </TSPServices>
    </TrustServiceProvider>
  </TrustServiceProviderList>
</TrustServiceStatusList>"#
        )
    }

    #[test]
    fn test_walk_keeps_uri_text_verbatim() {
        let padded_type = format!("  {CA_QC}\n");
        let padded_status = format!("\n {GRANTED} ");
        let padded_extension = format!(" {FOR_ESIG}");
        let xml = single_service(&format!(
            "<ServiceTypeIdentifier>{padded_type}</ServiceTypeIdentifier>\
             <ServiceStatus>{padded_status}</ServiceStatus>\
             <ServiceInformationExtensions><Extension><AdditionalServiceInformation>\
             <URI>{padded_extension}</URI>\
             </AdditionalServiceInformation></Extension></ServiceInformationExtensions>"
        ));

        let service = TrustedList::from_xml(&xml).unwrap().services().next().unwrap();
        assert_eq!(service.service_type, Resolved::Unknown(padded_type));
        assert_eq!(service.status, Resolved::Unknown(padded_status));
        assert_eq!(service.extensions, vec![Resolved::Unknown(padded_extension)]);
    }

    #[test]
    fn test_walk_unescapes_entities_and_cdata() {
        let xml = single_service(&format!(
            "<ServiceTypeIdentifier><![CDATA[{CA_QC}]]></ServiceTypeIdentifier>\
             <ServiceName><Name>Bank &amp; Trust</Name></ServiceName>\
             <ServiceStatus>{GRANTED}</ServiceStatus>"
        ));

        let service = TrustedList::from_xml(&xml).unwrap().services().next().unwrap();
        assert!(service.service_type.is(ServiceType::CaQc));
        assert!(service.status.is(ServiceStatus::Granted));
        assert_eq!(service.name, "Bank & Trust");
    }

    #[test]
    fn test_walk_interleaved_elements() {
        let xml = single_service(&format!(
            "<ServiceTypeIdentifier>{CA_QC}</ServiceTypeIdentifier>\
             <ServiceDigitalIdentity><DigitalId>\
             <X509Certificate>YWJjZA==</X509Certificate>\
             <X509SKI>AQID</X509SKI>\
             <X509Certificate>ZWZnaA==</X509Certificate>\
             </DigitalId></ServiceDigitalIdentity>\
             <ServiceStatus>{GRANTED}</ServiceStatus>\
             <ServiceInformationExtensions>\
             <Extension><AdditionalServiceInformation><URI>{FOR_ESIG}</URI></AdditionalServiceInformation></Extension>\
             <Other/>\
             <Extension><AdditionalServiceInformation><URI>{FOR_ESEALS}</URI></AdditionalServiceInformation></Extension>\
             </ServiceInformationExtensions>"
        ));

        let list = TrustedList::from_xml(&xml).unwrap();
        let info = list.providers()[0].services.services[0]
            .information
            .as_ref()
            .unwrap();
        assert_eq!(info.digital_identity.digital_ids[0].certificates.len(), 2);

        let service = list.services().next().unwrap();
        assert_eq!(service.certificate.as_bytes(), b"abcd");
        assert_eq!(
            service.extensions,
            vec![
                Resolved::Known(ServiceExtension::ESignatures),
                Resolved::Known(ServiceExtension::ESeals),
            ]
        );
    }

    #[test]
    fn test_history_does_not_override_current_information() {
        let xml = format!(
            r#"<TrustServiceStatusList>
  <TrustServiceProviderList>
    <TrustServiceProvider>
      <TSPServices>
        <TSPService>
          <ServiceHistory>
            <ServiceHistoryInstance>
              <ServiceStatus>{WITHDRAWN}</ServiceStatus>
            </ServiceHistoryInstance>
          </ServiceHistory>
          <ServiceInformation>
            <ServiceStatus>{GRANTED}</ServiceStatus>
          </ServiceInformation>
        </TSPService>
      </TSPServices>
    </TrustServiceProvider>
  </TrustServiceProviderList>
</TrustServiceStatusList>"#
        );
        let service = TrustedList::from_xml(&xml).unwrap().services().next().unwrap();
        assert!(service.status.is(ServiceStatus::Granted));
    }

    #[test]
    fn test_declared_encoding() {
        let mut xml = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n".to_vec();
        xml.extend_from_slice(
            b"<TrustServiceStatusList><TrustServiceProviderList><TrustServiceProvider>\
              <TSPInformation><TSPName><Name>Societ\xe0 Fiduciaria</Name></TSPName></TSPInformation>\
              </TrustServiceProvider></TrustServiceProviderList></TrustServiceStatusList>",
        );

        let list = TrustedList::from_bytes(&xml).unwrap();
        assert_eq!(list.providers()[0].name(), "Societ\u{e0} Fiduciaria");
    }
}
