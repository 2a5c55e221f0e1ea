use serde::{Deserialize, Serialize};
use std::fmt;

const CANONICAL_LEN: usize = 7;
const SHORT_LEN: usize = 6;
const SHORT_LEADING_DIGIT: u8 = b'9';

/// Canonical participant identifier (7 digits, or 6 digits starting with 9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonicalize a raw digit token into a member id.
///
/// Long tokens (OCR often glues a prefix onto the id) keep their last 7
/// digits. Returns `None` for anything that is not a valid id shape.
pub fn normalize(token: &str) -> Option<MemberId> {
    let digits = token.trim();
    if !is_digit_run(digits) {
        return None;
    }

    let canonical = select_canonical_digits(digits)?;
    canonical.parse().ok().map(MemberId)
}

pub fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn select_canonical_digits(digits: &str) -> Option<&str> {
    match digits.len() {
        len if len > CANONICAL_LEN => Some(&digits[len - CANONICAL_LEN..]),
        CANONICAL_LEN => Some(digits),
        SHORT_LEN if digits.as_bytes()[0] == SHORT_LEADING_DIGIT => Some(digits),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seven_digit_token() {
        assert_eq!(normalize("1802222"), Some(MemberId(1802222)));
        assert_eq!(normalize("  1900131 "), Some(MemberId(1900131)));
    }

    #[test]
    fn test_long_token_keeps_last_seven() {
        assert_eq!(normalize("001802222"), Some(MemberId(1802222)));
        assert_eq!(normalize("12345678"), Some(MemberId(2345678)));
    }

    #[test]
    fn test_six_digit_token_needs_leading_nine() {
        assert_eq!(normalize("912345"), Some(MemberId(912345)));
        assert_eq!(normalize("812345"), None);
    }

    #[test]
    fn test_rejects_short_and_non_digit() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("12345"), None);
        assert_eq!(normalize("18022a2"), None);
        assert_eq!(normalize("1802 222"), None);
    }

    #[test]
    fn test_leading_zero_seven_digits() {
        assert_eq!(normalize("0123456"), Some(MemberId(123456)));
    }

    proptest! {
        #[test]
        fn test_canonical_ids_are_fixed_points(id in 1_000_000u32..=9_999_999) {
            prop_assert_eq!(normalize(&id.to_string()), Some(MemberId(id)));
        }

        #[test]
        fn test_nine_leading_six_digit_ids_are_fixed_points(rest in 0u32..=99_999) {
            let id = 900_000 + rest;
            prop_assert_eq!(normalize(&id.to_string()), Some(MemberId(id)));
        }

        #[test]
        fn test_long_tokens_take_last_seven(token in "[0-9]{8,20}") {
            let expected: u32 = token[token.len() - 7..].parse().unwrap();
            prop_assert_eq!(normalize(&token), Some(MemberId(expected)));
        }
    }
}
