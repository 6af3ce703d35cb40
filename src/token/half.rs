// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Three-digit halves of a token code.

use std::fmt;

/// Number of ASCII digits in a full token code.
pub const CODE_LENGTH: usize = 6;

/// Number of ASCII digits in each half.
pub const HALF_LENGTH: usize = CODE_LENGTH / 2;

/// One half of a token code: either the "takes" or the "gives" side.
///
/// Stored as the three raw ASCII digits so that leading zeros survive
/// (`"007"` and `"7"` are different halves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Half([u8; HALF_LENGTH]);

impl Half {
    /// Build a half from exactly three ASCII digits.
    pub fn try_new(digits: &[u8]) -> Option<Self> {
        if digits.len() != HALF_LENGTH || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let mut raw = [0u8; HALF_LENGTH];
        raw.copy_from_slice(digits);
        Some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Check that `code` is exactly six ASCII digits.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

/// Split a validated code into its (takes, gives) halves.
///
/// Returns None if `code` is not exactly six ASCII digits.
pub fn split_code(code: &str) -> Option<(Half, Half)> {
    if !is_valid_code(code) {
        return None;
    }
    let bytes = code.as_bytes();
    Some((
        Half::try_new(&bytes[..HALF_LENGTH])?,
        Half::try_new(&bytes[HALF_LENGTH..])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_keeps_leading_zeros() {
        let half = Half::try_new(b"007").unwrap();
        assert_eq!(half.as_str(), "007");
        assert_eq!(half.to_string(), "007");
    }

    #[test]
    fn test_half_rejects_bad_input() {
        assert!(Half::try_new(b"12").is_none());
        assert!(Half::try_new(b"1234").is_none());
        assert!(Half::try_new(b"1a3").is_none());
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("123456"));
        assert!(is_valid_code("000000"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("12345"));
        assert!(!is_valid_code("1234567"));
        assert!(!is_valid_code("12a456"));
        assert!(!is_valid_code(" 23456"));
        // Six bytes but not six digits.
        assert!(!is_valid_code("１２"));
    }

    #[test]
    fn test_split_code() {
        let (takes, gives) = split_code("100200").unwrap();
        assert_eq!(takes.as_str(), "100");
        assert_eq!(gives.as_str(), "200");
        assert!(split_code("10020").is_none());
    }

    #[test]
    fn test_display_respects_width() {
        let half = Half::try_new(b"123").unwrap();
        assert_eq!(format!("{:<6}|", half), "123   |");
    }
}
