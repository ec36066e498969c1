use once_cell::sync::Lazy;
use regex::Regex;

/// Marker closing the last meaningful certificate chain in a keybox file.
/// Text after its first occurrence never contributes certificates.
pub const CHAIN_END_MARKER: &str = "</CertificateChain>";

static CERT_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)-----BEGIN CERTIFICATE.*?-----END CERTIFICATE.*?-----").unwrap()
});

/// Extract every PEM certificate block from the file text, trimmed, in
/// document order. Zero matches yields an empty vector; the caller treats
/// that as "no certificates in this file", not an error.
pub fn extract_certificate_blocks(file_text: &str) -> Vec<String> {
    let scope = match file_text.find(CHAIN_END_MARKER) {
        Some(idx) => &file_text[..idx],
        None => file_text,
    };

    CERT_BLOCK_REGEX
        .find_iter(scope)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}
