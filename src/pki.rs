pub mod keybox;
pub mod revocation;

// Re-export commonly used types
pub use keybox::{CertificateStatus, KeyboxError, check_certificate, extract_certificate_blocks};
pub use revocation::{RevocationError, RevocationList, RevocationListFetcher};
