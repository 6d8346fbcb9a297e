//! Where a Trusted List comes from
//!
//! A source is either a local file or a national list published by a
//! member state, selected with `@fetch:XX` where `XX` is the two-letter
//! country code.

use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Prefix selecting a remote national list
pub const FETCH_PREFIX: &str = "@fetch:";

/// Download locations of the national Trusted Lists, keyed by country code
pub const COUNTRY_URLS: &[(&str, &str)] = &[("IT", "https://eidas.agid.gov.it/TL/TSL-IT.xml")];

/// Look up the download URL for a country code (case-insensitive)
pub fn country_url(code: &str) -> Option<&'static str> {
    COUNTRY_URLS
        .iter()
        .find(|(country, _)| country.eq_ignore_ascii_case(code))
        .map(|(_, url)| *url)
}

/// Input document location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TslSource {
    /// A Trusted List stored on the local filesystem
    Local(PathBuf),
    /// A national Trusted List to download
    Remote {
        /// Upper-cased country code
        country: String,
        /// Download URL
        url: String,
    },
}

impl TslSource {
    /// Parse a command-line input argument
    ///
    /// `@fetch:` followed by exactly two ASCII letters selects a remote list;
    /// anything else is taken as a local path.
    pub fn parse(input: &str) -> Result<Self> {
        let code = match input.strip_prefix(FETCH_PREFIX) {
            Some(code) if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                code
            }
            _ => return Ok(TslSource::Local(PathBuf::from(input))),
        };

        let url = country_url(code).ok_or_else(|| Error::UnknownCountry(code.to_string()))?;
        Ok(TslSource::Remote {
            country: code.to_ascii_uppercase(),
            url: url.to_string(),
        })
    }

    /// Whether the document must be downloaded
    pub fn is_remote(&self) -> bool {
        matches!(self, TslSource::Remote { .. })
    }
}

impl FromStr for TslSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TslSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TslSource::Local(path) => write!(f, "{}", path.display()),
            TslSource::Remote { url, .. } => f.write_str(url),
        }
    }
}
