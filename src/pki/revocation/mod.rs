//! Online revocation list support
//!
//! The published attestation status list is a plaintext document of revoked
//! serial numbers, one per line. It is fetched once per run and held as an
//! immutable membership set for the rest of the process lifetime.
//!
//! # Features
//! - One-shot fetching with cache-busting and a bounded timeout
//! - Line normalization tolerant of separators and stray characters
//! - Membership testing with an explicit empty-string guard

mod error;
mod fetcher;
mod types;

// Re-export public types
pub use error::{RevocationError, RevocationResult};
pub use fetcher::RevocationListFetcher;
pub use types::{RevocationList, normalize_serial};
