//! Core types for ETSI Trusted Lists
//!
//! This crate provides the fixed vocabulary used to describe trust services
//! in a Trusted List (service types, statuses and additional service
//! information), together with the per-service record that the rest of the
//! workspace filters and exports.

pub mod encoding;
pub mod error;
pub mod service;
pub mod vocabulary;

pub use encoding::DerCertificate;
pub use error::{Error, Result};
pub use service::ResolvedService;
pub use vocabulary::{Resolved, ServiceExtension, ServiceStatus, ServiceType, Vocabulary};
