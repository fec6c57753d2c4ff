//! Field validators. Each accepts or rejects raw form text, nothing in
//! between.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()#.\s/ext-]+$").unwrap());

static RE_MAILBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Absolute URL with a non-empty host.
///
/// Relative paths and host-less schemes (`mailto:alice`) are rejected.
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(u) => u.has_host(),
        Err(_) => false,
    }
}

/// Mailbox address, optionally wrapped in a display-name form
/// (`Ada Lovelace <ada@example.com>`).
pub fn is_valid_email(s: &str) -> bool {
    let addr = match (s.find('<'), s.ends_with('>')) {
        (Some(open), true) if open + 1 < s.len() => &s[open + 1..s.len() - 1],
        _ => s,
    };
    RE_MAILBOX.is_match(addr.trim())
}

/// Phone-number-like text: digits, separators, and the letters of the
/// literal "ext" suffix. Empty strings are rejected.
pub fn is_phone_like(s: &str) -> bool {
    RE_PHONE.is_match(s)
}

/// Decimal number text: ASCII digits with at most one `.` or `,` acting
/// as the separator. The comma form is normalized downstream.
pub fn is_decimal(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let mut seen_sep = false;
    for c in s.chars() {
        match c {
            '.' | ',' => {
                if seen_sep {
                    return false;
                }
                seen_sep = true;
            }
            '0'..='9' => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("http://localhost:8080"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("mailto:alice"));
        assert!(!is_valid_url("example.com"));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("Ada Lovelace <ada@example.com>"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("<>"));
    }

    #[test]
    fn test_phone_like() {
        assert!(is_phone_like("+7 (999) 123-45-67"));
        assert!(is_phone_like("123456789"));
        assert!(is_phone_like("555.123.4567 ext 12"));
        assert!(is_phone_like("#100/2"));
    }

    #[test]
    fn test_not_phone_like() {
        assert!(!is_phone_like(""));
        assert!(!is_phone_like("call me"));
        assert!(!is_phone_like("+7;999"));
    }

    #[test]
    fn test_decimals() {
        assert!(is_decimal("55"));
        assert!(is_decimal("55.75"));
        assert!(is_decimal("55,75"));
        assert!(is_decimal("0.0"));
    }

    #[test]
    fn test_not_decimals() {
        assert!(!is_decimal(""));
        assert!(!is_decimal("55.7.5"));
        assert!(!is_decimal("55,7.5"));
        assert!(!is_decimal("-55.75"));
        assert!(!is_decimal("abc"));
        assert!(!is_decimal("55 75"));
    }
}
