//! Trust anchor bundle export
//!
//! This crate decides which Trusted List services are trusted for a given
//! purpose and writes their certificates as a PEM bundle:
//! - [`FilterPolicy`] / [`FilterRule`]: which services to accept
//! - [`encode_certificate`]: DER to PEM
//! - [`BundleExporter`]: one pass over the services into an output sink
//!
//! # Example
//!
//! ```no_run
//! use tsl_bundle::{export_bundle, FilterPolicy};
//! use tsl_trust_list::TrustedList;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = TrustedList::from_file("TSL-IT.xml")?;
//! let mut out = std::io::stdout().lock();
//! let report = export_bundle(list.services(), &FilterPolicy::default(), &mut out)?;
//! eprintln!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod encoding;
pub mod error;
pub mod export;
pub mod policy;

pub use encoding::{describe_certificate, encode_certificate, CERTIFICATE_TAG};
pub use error::{Error, Result};
pub use export::{export_bundle, BundleExporter, ExportReport};
pub use policy::{accept, FilterPolicy, FilterRule};
