use std::{collections::HashMap, path::PathBuf};

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;

/// Default revocation-status endpoint (Google's attestation status list).
pub const DEFAULT_STATUS_URL: &str = "https://android.googleapis.com/attestation/status";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub revocation: RevocationConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevocationConfig {
    /// URL publishing revoked serial numbers as plaintext, one per line.
    pub status_url: String,
    /// Timeout for the list download, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Directory whose `.xml` files are scanned (non-recursive).
    pub directory: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("revocation.status_url", DEFAULT_STATUS_URL)?
            .set_default("revocation.timeout_secs", 10)?
            .set_default("scan.directory", ".")?
            .add_source(File::with_name("config/settings").required(false));

        // If env_vars is provided, we use it instead of system environment
        // This is to avoid systems variables pollution across tests
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // Use system environment variables
            // Should be in the format APP_REVOCATION__STATUS_URL or APP_SCAN__DIRECTORY
            builder = builder.add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }
}
