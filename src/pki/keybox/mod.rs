//! Keybox file handling
//!
//! A keybox is an XML file carrying one or more attestation certificate
//! chains. Certificates are located by PEM delimiter matching on the raw
//! text, so even a malformed document still yields its embedded blocks;
//! everything after the closing chain marker is ignored.

mod error;
mod extractor;
mod matcher;

// Re-export public types
pub use error::KeyboxError;
pub use extractor::{CHAIN_END_MARKER, extract_certificate_blocks};
pub use matcher::{CertificateStatus, check_certificate};
