//! Scanning of range API response bodies.
//!
//! A body is a list of `SUFFIX:COUNT` lines, where SUFFIX is the 35 uppercase
//! hex characters following the queried prefix and COUNT is a decimal integer.

use tracing::debug;

use crate::{HEX_CHARS, PREFIX_LEN};

/// Outcome of scanning a range response for one suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeScan {
    /// Breach count of the first matching line, or 0 when nothing matched.
    pub count: u64,
    /// Lines skipped because they were not `SUFFIX:COUNT`.
    pub malformed_lines: usize,
}

impl RangeScan {
    #[inline]
    pub fn is_breached(&self) -> bool {
        self.count > 0
    }
}

/// Returns the breach count for `suffix`, or 0 when no line matches.
pub fn find_count(body: &str, suffix: &str) -> u64 {
    scan_range(body, suffix).count
}

/// Scans `body` line by line and stops at the first exact suffix match.
///
/// Each line is split on its first colon. Lines without a colon, or whose count
/// is not a decimal integer, are skipped and tallied in
/// [`RangeScan::malformed_lines`]. Blank lines are ignored.
pub fn scan_range(body: &str, suffix: &str) -> RangeScan {
    let mut scan = RangeScan::default();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((line_suffix, count)) = line.split_once(':') else {
            scan.malformed_lines += 1;
            continue;
        };

        let Ok(count) = count.trim().parse::<u64>() else {
            scan.malformed_lines += 1;
            continue;
        };

        if line_suffix == suffix {
            scan.count = count;
            break;
        }
    }

    if scan.malformed_lines > 0 {
        debug!(malformed = scan.malformed_lines, "skipped malformed range lines");
    }

    scan
}

/// Whether `prefix` is a valid range key: exactly 5 uppercase hex characters.
pub fn is_range_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN && prefix.bytes().all(|b| HEX_CHARS.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Excerpt of a real response for prefix CBFDA.
    const BODY: &str = "C5F9F1BA37F27C5C1287D0EC1B9F2C1E5A3:3\r\n\
                        C6008F9CAB4083784CBD1874F76618D2A97:2254650\r\n\
                        C6155E0F3C73D8B2B6E9D6E5C4C1B3C3A3B:0\r\n";

    #[test]
    fn test_find_count_match() {
        assert_eq!(find_count(BODY, "C6008F9CAB4083784CBD1874F76618D2A97"), 2254650);
    }

    #[test]
    fn test_find_count_no_match() {
        assert_eq!(find_count(BODY, "00000000000000000000000000000000000"), 0);
        assert_eq!(find_count("", "C6008F9CAB4083784CBD1874F76618D2A97"), 0);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert_eq!(find_count(BODY, "c6008f9cab4083784cbd1874f76618d2a97"), 0);
    }

    #[test]
    fn test_padding_entry_is_not_breached() {
        let scan = scan_range(BODY, "C6155E0F3C73D8B2B6E9D6E5C4C1B3C3A3B");
        assert_eq!(scan.count, 0);
        assert!(!scan.is_breached());
    }

    #[test]
    fn test_first_match_wins() {
        let body = "AAAAA:5\nAAAAA:9\n";
        assert_eq!(find_count(body, "AAAAA"), 5);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let body = "no colon here\n\
                    BBBBB:not-a-number\n\
                    \n\
                    CCCCC:12\n";
        let scan = scan_range(body, "CCCCC");
        assert_eq!(scan, RangeScan { count: 12, malformed_lines: 2 });
    }

    #[test]
    fn test_split_on_first_colon() {
        // Everything after the first colon is the count, so this is malformed.
        let scan = scan_range("DDDDD:1:2\n", "DDDDD");
        assert_eq!(scan, RangeScan { count: 0, malformed_lines: 1 });
    }

    #[test]
    fn test_is_range_prefix() {
        assert!(is_range_prefix("CBFDA"));
        assert!(is_range_prefix("00000"));
        assert!(!is_range_prefix("cbfda"));
        assert!(!is_range_prefix("CBFD"));
        assert!(!is_range_prefix("CBFDAC"));
        assert!(!is_range_prefix("CBFDG"));
        assert!(!is_range_prefix("../a"));
    }
}
