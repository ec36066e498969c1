use thiserror::Error;
use x509_parser::prelude::X509Error;

/// Errors for a single certificate block. Always local to that block:
/// the caller reports the cause and moves on to the next certificate.
#[derive(Debug, Error)]
pub enum KeyboxError {
    #[error("PEM decoding failed: {0}")]
    Pem(#[from] pem::PemError),

    #[error("unexpected PEM tag: {0}")]
    UnexpectedTag(String),

    #[error("X.509 parsing failed: {0}")]
    X509(#[from] X509Error),
}
