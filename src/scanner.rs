//! Directory traversal and per-file certificate checking.
//!
//! Walks a single directory (non-recursive) for `.xml` keybox files,
//! extracts the PEM certificate blocks from each and feeds them through
//! the revocation matcher, accumulating everything into a [`ScanReport`].

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::pki::keybox::{check_certificate, extract_certificate_blocks};
use crate::pki::revocation::RevocationList;
use crate::report::ScanReport;

/// Errors that abort a scan. File-level problems are logged and
/// skipped instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read keybox directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type alias for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Checks every keybox file in a directory against one revocation list.
pub struct Scanner {
    revoked: RevocationList,
}

impl Scanner {
    pub fn new(revoked: RevocationList) -> Self {
        Self { revoked }
    }

    /// Scan all `.xml` files in `dir`, in file-name order.
    pub async fn scan_directory(&self, dir: &Path) -> ScanResult<ScanReport> {
        let files = list_keybox_files(dir).await?;
        debug!(
            count = files.len(),
            directory = %dir.display(),
            "Discovered keybox files"
        );

        let mut report = ScanReport::new();
        for path in &files {
            self.scan_file(path, &mut report).await;
        }
        Ok(report)
    }

    /// Process one file. An unreadable file is logged and skipped but
    /// still counts as scanned.
    async fn scan_file(&self, path: &Path, report: &mut ScanReport) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        report.start_file(&file_name);

        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return;
            }
        };
        // Keybox files occasionally carry stray bytes around the PEM
        // blocks, so decode leniently instead of failing the file.
        let content = String::from_utf8_lossy(&bytes);

        let blocks = extract_certificate_blocks(&content);
        if blocks.is_empty() {
            report.no_certificates();
            return;
        }

        for (i, block) in blocks.iter().enumerate() {
            let status = check_certificate(block, &self.revoked);
            report.record_certificate(&file_name, i + 1, &status);
        }
        report.finish_file(&file_name);
    }
}

/// List regular files named `*.xml` (case-insensitive) directly in
/// `dir`, sorted by name for deterministic output.
async fn list_keybox_files(dir: &Path) -> ScanResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await.map_err(|e| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })? {
        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Failed to stat {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().to_ascii_lowercase().ends_with(".xml") {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}
