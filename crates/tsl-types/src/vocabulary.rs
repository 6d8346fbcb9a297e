//! Trusted List vocabulary tables
//!
//! ETSI TS 119 612 identifies service types, statuses and additional service
//! information with URIs. Each vocabulary here maps a short label to exactly
//! one canonical URI. Lookups are byte-for-byte: a URI that differs in case
//! or whitespace is reported as [`Resolved::Unknown`] rather than guessed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed table of labels and their canonical URIs
pub trait Vocabulary: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable name of the vocabulary, used in error messages
    const KIND: &'static str;

    /// Every label with its short name and canonical URI
    const TABLE: &'static [(Self, &'static str, &'static str)];

    /// Resolve a URI found in a document against this table
    fn resolve(uri: &str) -> Resolved<Self> {
        Self::TABLE
            .iter()
            .find(|(_, _, candidate)| *candidate == uri)
            .map(|(label, _, _)| Resolved::Known(*label))
            .unwrap_or_else(|| Resolved::Unknown(uri.to_string()))
    }

    /// Look up a label by its short name
    fn from_name(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, candidate, _)| *candidate == name)
            .map(|(label, _, _)| *label)
    }

    /// Short name of this label
    fn name(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(label, _, _)| *label == self)
            .map(|(_, name, _)| *name)
            .unwrap_or_default()
    }

    /// Canonical URI of this label
    fn uri(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(label, _, _)| *label == self)
            .map(|(_, _, uri)| *uri)
            .unwrap_or_default()
    }
}

/// Outcome of resolving a URI against a vocabulary
///
/// `Unknown` keeps the unresolved URI for diagnostics. It never compares
/// equal to a `Known` label, so an unresolved value cannot satisfy a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolved<L> {
    /// The URI matched a table entry
    Known(L),
    /// The URI is absent from the table (or the element was missing)
    Unknown(String),
}

impl<L: Vocabulary> Resolved<L> {
    /// Resolve a URI against `L`'s table
    pub fn from_uri(uri: &str) -> Self {
        L::resolve(uri)
    }

    /// The resolved label, if any
    pub fn known(&self) -> Option<L> {
        match self {
            Resolved::Known(label) => Some(*label),
            Resolved::Unknown(_) => None,
        }
    }

    /// Whether this value resolved to exactly `label`
    pub fn is(&self, label: L) -> bool {
        self.known() == Some(label)
    }

    /// Whether the URI could not be resolved
    pub fn is_unknown(&self) -> bool {
        matches!(self, Resolved::Unknown(_))
    }
}

impl<L: Vocabulary> fmt::Display for Resolved<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Known(label) => f.write_str(label.name()),
            Resolved::Unknown(uri) if uri.is_empty() => f.write_str("unknown"),
            Resolved::Unknown(uri) => write!(f, "unknown({})", uri),
        }
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($name:literal, $uri:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        $vis enum $ty {
            $(
                $(#[$vmeta])*
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl Vocabulary for $ty {
            const KIND: &'static str = $kind;
            const TABLE: &'static [(Self, &'static str, &'static str)] =
                &[$((Self::$variant, $name, $uri),)+];
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_name(s).ok_or_else(|| Error::UnknownLabel {
                    kind: Self::KIND,
                    name: s.to_string(),
                })
            }
        }
    };
}

vocabulary! {
    /// Service type identifier (`ServiceTypeIdentifier`)
    pub enum ServiceType as "service type" {
        /// CA issuing qualified certificates
        CaQc => ("CA/QC", "http://uri.etsi.org/TrstSvc/Svctype/CA/QC"),
        /// Identity verification service
        IdV => ("IdV", "http://uri.etsi.org/TrstSvc/Svctype/IdV"),
        /// Time-stamping authority
        Tsa => ("TSA", "http://uri.etsi.org/TrstSvc/Svctype/TSA"),
        /// Qualified electronic time stamp service
        TsaQtst => ("TSA/QTST", "http://uri.etsi.org/TrstSvc/Svctype/TSA/QTST"),
        /// Time stamping for qualified certificates
        TsaTssQc => ("TSA/TSS-QC", "http://uri.etsi.org/TrstSvc/Svctype/TSA/TSS-QC"),
    }
}

vocabulary! {
    /// Current status of a service (`ServiceStatus`)
    pub enum ServiceStatus as "service status" {
        Deprecated => (
            "deprecated",
            "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/deprecatedatnationallevel"
        ),
        Granted => ("granted", "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/granted"),
        Recognised => (
            "recognised",
            "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/recognisedatnationallevel"
        ),
        Withdrawn => ("withdrawn", "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/withdrawn"),
    }
}

vocabulary! {
    /// Additional service information URI carried by a service extension
    pub enum ServiceExtension as "service extension" {
        ESeals => ("eSeals", "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSeals"),
        ESignatures => (
            "eSignatures",
            "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSignatures"
        ),
        WebSiteAuthentication => (
            "WebSiteAuthentication",
            "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForWebSiteAuthentication"
        ),
    }
}
