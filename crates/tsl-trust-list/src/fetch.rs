//! HTTPS client for downloading national Trusted Lists
//!
//! # Example
//!
//! ```no_run
//! use tsl_trust_list::TrustedListClient;
//!
//! # async fn example() -> Result<(), tsl_trust_list::Error> {
//! let client = TrustedListClient::for_country("IT")?;
//! let list = client.fetch().await?;
//! println!("{} services", list.service_count());
//! # Ok(())
//! # }
//! ```

use crate::source::country_url;
use crate::{Error, Result, TrustedList};

/// A client for downloading a Trusted List
pub struct TrustedListClient {
    /// URL of the Trusted List
    url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl TrustedListClient {
    /// Create a new client for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client for a national list by country code
    pub fn for_country(code: &str) -> Result<Self> {
        let url = country_url(code).ok_or_else(|| Error::UnknownCountry(code.to_string()))?;
        Ok(Self::new(url))
    }

    /// URL this client downloads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the raw document
    pub async fn fetch_bytes(&self) -> Result<Vec<u8>> {
        tracing::debug!(url = %self.url, "downloading trusted list");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "failed to download {}: {}",
                self.url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Http(format!("failed to read response body: {}", e)))?;
        tracing::debug!(len = bytes.len(), "downloaded trusted list");
        Ok(bytes.to_vec())
    }

    /// Download and parse the document
    pub async fn fetch(&self) -> Result<TrustedList> {
        let bytes = self.fetch_bytes().await?;
        TrustedList::from_bytes(&bytes)
    }
}

/// Download and parse the Trusted List published at `url`
pub async fn fetch_trusted_list(url: &str) -> Result<TrustedList> {
    TrustedListClient::new(url).fetch().await
}
