//! Log sanitization utilities
//!
//! Response bodies carry ACME challenge tokens and may echo account
//! details on errors; debug logs get a bounded prefix instead of the
//! full payload.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it is within the limit, otherwise the
/// first `TRUNCATE_LIMIT` bytes plus a suffix carrying the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "[]";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "x".repeat(TRUNCATE_LIMIT + 64);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 64)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_not_split() {
        let s = "õ".repeat(TRUNCATE_LIMIT); // each 'õ' is 2 bytes
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
