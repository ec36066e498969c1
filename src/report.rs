//! Console reporting for keybox scans.
//!
//! Accumulates per-file and global counters during a single pass and
//! renders the human-readable per-certificate detail plus the final
//! summary block. Counting and grouping only, no other computation.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::pki::keybox::CertificateStatus;

/// One revoked certificate, retained for the final summary listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based position of the certificate within its file.
    pub ordinal: usize,
    pub hex_serial: Option<String>,
    pub issuer_serial: Option<String>,
}

/// Accumulated results of one scan run.
///
/// Counters only grow during the pass and are discarded at process exit.
#[derive(Debug, Default)]
pub struct ScanReport {
    files_scanned: usize,
    certificates_checked: usize,
    revoked_count: usize,
    matches_by_file: BTreeMap<String, Vec<MatchRecord>>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and announce it. Every candidate file counts,
    /// whether or not any certificate is found in it.
    pub fn start_file(&mut self, file_name: &str) {
        self.files_scanned += 1;
        println!("\nProcessing {file_name}...");
    }

    pub fn no_certificates(&self) {
        println!("  No certificates found");
    }

    /// Record one checked certificate and print its detail block.
    pub fn record_certificate(
        &mut self,
        file_name: &str,
        ordinal: usize,
        status: &CertificateStatus,
    ) {
        self.certificates_checked += 1;

        println!("\n  Certificate {ordinal}:");
        println!("    Hex Serial: {}", display_serial(&status.hex_serial));
        println!(
            "    Issuer Serial: {}",
            display_serial(&status.issuer_serial)
        );

        if status.revoked {
            println!("    {}", "STATUS: REVOKED".red());
            self.revoked_count += 1;
            self.matches_by_file
                .entry(file_name.to_string())
                .or_default()
                .push(MatchRecord {
                    ordinal,
                    hex_serial: status.hex_serial.clone(),
                    issuer_serial: status.issuer_serial.clone(),
                });
        } else {
            println!("    {}", "STATUS: VALID".green());
        }
    }

    /// Close out a file, echoing its match count when any was found.
    pub fn finish_file(&mut self, file_name: &str) {
        let matches = self
            .matches_by_file
            .get(file_name)
            .map(Vec::len)
            .unwrap_or(0);
        if matches > 0 {
            println!("\n  Found {matches} matches in {file_name}");
        }
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn certificates_checked(&self) -> usize {
        self.certificates_checked
    }

    pub fn revoked_count(&self) -> usize {
        self.revoked_count
    }

    pub fn valid_count(&self) -> usize {
        self.certificates_checked - self.revoked_count
    }

    pub fn matches_by_file(&self) -> &BTreeMap<String, Vec<MatchRecord>> {
        &self.matches_by_file
    }

    /// Render the final summary block with the match listing.
    pub fn print_summary(&self) {
        println!("\n\n=== FINAL RESULTS ===");
        println!("Total keybox files scanned: {}", self.files_scanned);
        println!("Total certificates checked: {}", self.certificates_checked);
        println!(
            "Valid certificates: {}",
            self.valid_count().to_string().green()
        );
        println!(
            "Revoked certificates: {}",
            self.revoked_count.to_string().red()
        );

        if self.matches_by_file.is_empty() {
            return;
        }

        println!("\nKeyboxes containing matching serials:");
        for (file_name, matches) in &self.matches_by_file {
            println!("\n{file_name}:");
            for record in matches {
                println!(
                    "  Certificate {}: hex serial {}, issuer serial {}",
                    record.ordinal,
                    display_serial(&record.hex_serial),
                    display_serial(&record.issuer_serial)
                );
            }
        }
    }
}

/// Missing or empty serials render as `N/A`.
fn display_serial(serial: &Option<String>) -> &str {
    match serial.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => "N/A",
    }
}
