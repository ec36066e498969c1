use reqwest::StatusCode;
use thiserror::Error;

/// Revocation-list errors. All of them are fatal to the run: the scan is
/// meaningless without the list.
#[derive(Debug, Error)]
pub enum RevocationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid status endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("status endpoint returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("timeout while fetching revocation list")]
    Timeout,
}

/// Convenient Result type alias
pub type RevocationResult<T> = Result<T, RevocationError>;
