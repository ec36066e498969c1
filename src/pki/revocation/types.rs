use std::collections::HashSet;

/// Immutable set of revoked serial numbers, built once per run.
///
/// Entries are normalized to lowercase hex with every other character
/// stripped, so membership is insensitive to case, separators and stray
/// formatting in the published list. Source order and duplicates are
/// irrelevant.
#[derive(Debug, Clone, Default)]
pub struct RevocationList {
    serials: HashSet<String>,
}

impl RevocationList {
    /// Build the set from the plaintext list body: one serial per line,
    /// blank lines discarded, every remaining line hex-normalized.
    pub fn from_text(body: &str) -> Self {
        let serials = body
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(normalize_serial)
            .collect();

        Self { serials }
    }

    /// Membership test. The empty string never matches, even when the
    /// published list held a line that normalized to nothing.
    pub fn contains(&self, serial: &str) -> bool {
        !serial.is_empty() && self.serials.contains(serial)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }
}

/// Lowercase `raw` and strip every character outside `[0-9a-f]`.
pub fn normalize_serial(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(char::is_ascii_hexdigit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_hex() {
        assert_eq!(normalize_serial("AB:CD:EF"), "abcdef");
        assert_eq!(normalize_serial("  12-34\t"), "1234");
        assert_eq!(normalize_serial("0xDEADbeef"), "0deadbeef");
        assert_eq!(normalize_serial("ghijk"), "");
    }

    #[test]
    fn test_normalized_form_is_hex_only() {
        for raw in ["Serial: 01-23", "ZZ99zz", "§±!@#abcDEF", ""] {
            assert!(
                normalize_serial(raw)
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            );
        }
    }

    #[test]
    fn test_from_text_skips_blank_lines_and_dedupes() {
        let list = RevocationList::from_text("abc123\n\n   \nABC123\r\n456def\n");

        assert_eq!(list.len(), 2);
        assert!(list.contains("abc123"));
        assert!(list.contains("456def"));
    }

    #[test]
    fn test_membership_is_case_and_separator_insensitive_via_normalization() {
        let list = RevocationList::from_text("DE:AD:BE:EF\n");
        assert!(list.contains("deadbeef"));
        assert!(!list.contains("deadbeee"));
    }

    #[test]
    fn test_empty_string_never_matches() {
        // A non-blank line with no hex characters normalizes to "" and
        // lands in the set; membership must still reject the empty string.
        let list = RevocationList::from_text("zzzz\nabc123\n");

        assert!(list.contains("abc123"));
        assert!(!list.contains(""));
    }
}
