use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use tokio::time::timeout;
use tracing::info;
use url::Url;

use super::error::{RevocationError, RevocationResult};
use super::types::RevocationList;

/// Downloads the published revocation list, once per run.
#[derive(Debug, Clone)]
pub struct RevocationListFetcher {
    client: Client,
    status_url: String,
    request_timeout: Duration,
}

impl RevocationListFetcher {
    /// Returns an error if the HTTP client cannot be initialized
    pub fn new(status_url: impl Into<String>, timeout_secs: u64) -> RevocationResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("keybox-checker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            status_url: status_url.into(),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Fetch the revocation list from the status endpoint with timeout.
    ///
    /// The request carries a `Cache-Control: no-cache` header and the
    /// current Unix time as a cache-busting query parameter, so
    /// intermediaries cannot serve a stale copy of the list.
    pub async fn fetch(&self) -> RevocationResult<RevocationList> {
        // Validate URL (uses #[from] url::ParseError)
        let _ = Url::parse(&self.status_url)?;

        info!("Fetching revocation list from: {}", self.status_url);

        let request = self
            .client
            .get(format!("{}?{}", self.status_url, Utc::now().timestamp()))
            .header(CACHE_CONTROL, "no-cache")
            .send();

        let response = match timeout(self.request_timeout, request).await {
            Ok(result) => result?,
            Err(_) => return Err(RevocationError::Timeout),
        };

        if !response.status().is_success() {
            return Err(RevocationError::Status {
                status: response.status(),
                url: self.status_url.clone(),
            });
        }

        let body = response.text().await?;
        let list = RevocationList::from_text(&body);

        info!("Revocation list loaded: {} serial(s)", list.len());
        Ok(list)
    }
}
