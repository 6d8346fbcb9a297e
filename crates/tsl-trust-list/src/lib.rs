//! ETSI Trusted List loading and traversal
//!
//! This crate parses a Trusted List (TSL) XML document into a lightweight
//! tree and walks it provider by provider, service by service, resolving
//! each service's metadata URIs into vocabulary labels:
//! - `ServiceTypeIdentifier` into a [`ServiceType`](tsl_types::ServiceType)
//! - `ServiceStatus` into a [`ServiceStatus`](tsl_types::ServiceStatus)
//! - `AdditionalServiceInformation/URI` into a [`ServiceExtension`](tsl_types::ServiceExtension)
//!
//! # Features
//!
//! - `fetch` - Enable downloading Trusted Lists over HTTPS with
//!   [`TrustedListClient`].
//!
//! # Example
//!
//! ```no_run
//! use tsl_trust_list::TrustedList;
//!
//! let list = TrustedList::from_file("TSL-IT.xml").unwrap();
//! for service in list.services() {
//!     println!("{} {} {}", service.provider, service.service_type, service.status);
//! }
//! ```

pub mod error;
pub mod source;
pub mod trusted_list;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use error::{Error, Result};
pub use source::{country_url, TslSource, COUNTRY_URLS};
pub use trusted_list::{TrustServiceProvider, TrustedList, TspService};

#[cfg(feature = "fetch")]
pub use fetch::{fetch_trusted_list, TrustedListClient};
