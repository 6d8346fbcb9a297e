//! Service acceptance policy
//!
//! A [`FilterPolicy`] is an ordered list of [`FilterRule`]s. A service is
//! accepted when it satisfies any rule; a rule is satisfied when every
//! condition it sets holds. A condition left unset is ignored, so a rule
//! with no conditions accepts every service.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tsl_types::{ResolvedService, ServiceExtension, ServiceStatus, ServiceType};

/// A conjunction of optional conditions on a service
///
/// In JSON a rule is an object with optional `type`, `status` and
/// `extension` keys holding label names:
///
/// ```json
/// {"type": "CA/QC", "status": "granted", "extension": "eSignatures"}
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterRule {
    /// Required service type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,

    /// Required service status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,

    /// Extension the service must declare
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<ServiceExtension>,
}

impl FilterRule {
    /// A rule without conditions, matching every service
    pub fn any() -> Self {
        Self::default()
    }

    /// Require a specific service type
    pub fn require_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    /// Require a specific service status
    pub fn require_status(mut self, status: ServiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Require the service to declare an extension
    pub fn require_extension(mut self, extension: ServiceExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Whether the rule sets no condition at all
    pub fn is_unconditional(&self) -> bool {
        self.service_type.is_none() && self.status.is_none() && self.extension.is_none()
    }

    /// Check every condition of this rule against a service
    ///
    /// An unresolved service value never satisfies a condition.
    pub fn matches(&self, service: &ResolvedService) -> bool {
        self.service_type
            .map_or(true, |required| service.service_type.is(required))
            && self
                .status
                .map_or(true, |required| service.status.is(required))
            && self
                .extension
                .map_or(true, |required| service.has_extension(required))
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconditional() {
            return f.write_str("any");
        }
        let mut conditions = Vec::new();
        if let Some(service_type) = self.service_type {
            conditions.push(format!("type={}", service_type));
        }
        if let Some(status) = self.status {
            conditions.push(format!("status={}", status));
        }
        if let Some(extension) = self.extension {
            conditions.push(format!("extension={}", extension));
        }
        f.write_str(&conditions.join(" "))
    }
}

/// An ordered disjunction of [`FilterRule`]s
///
/// The default policy accepts granted qualified-certificate CAs that issue
/// for electronic signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterPolicy {
    rules: Vec<FilterRule>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::qualified_esignatures()
    }
}

impl FilterPolicy {
    /// Create a policy from rules
    pub fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// CA/QC services, currently granted, issuing for eSignatures
    pub fn qualified_esignatures() -> Self {
        Self::new(vec![FilterRule::any()
            .require_type(ServiceType::CaQc)
            .require_status(ServiceStatus::Granted)
            .require_extension(ServiceExtension::ESignatures)])
    }

    /// A policy accepting every service
    pub fn accept_all() -> Self {
        Self::new(vec![FilterRule::any()])
    }

    /// Add a rule
    pub fn with_rule(mut self, rule: FilterRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Parse a policy from a JSON array of rules
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a policy from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::PolicyFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// First rule satisfied by the service, if any
    pub fn matching_rule(&self, service: &ResolvedService) -> Option<&FilterRule> {
        self.rules.iter().find(|rule| rule.matches(service))
    }

    /// Whether any rule accepts the service
    pub fn accepts(&self, service: &ResolvedService) -> bool {
        self.matching_rule(service).is_some()
    }
}

/// Decide whether `policy` accepts `service`
pub fn accept(service: &ResolvedService, policy: &FilterPolicy) -> bool {
    policy.accepts(service)
}
