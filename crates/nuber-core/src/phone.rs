//! Phone number validation.
//!
//! A phone number is submitted as the dial code followed by the digits the
//! user typed, with no separator. Nothing reaches a service unless it passes
//! [`validate`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `+`, one non-zero digit, then 7 to 11 more digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[1-9][0-9]{7,11}$").expect("phone pattern is a valid regex")
});

/// A phone number that matched the international-format pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedPhone(String);

impl ValidatedPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Masked form for logs: everything but the last four digits hidden.
    pub fn redacted(&self) -> String {
        let tail_start = self.0.len().saturating_sub(4);
        format!("***{}", &self.0[tail_start..])
    }
}

impl fmt::Display for ValidatedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidatedPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rejected phone input. Always user-correctable, never sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidFormat,
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::InvalidFormat => "invalid_format",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::error::Error for ValidationError {}

/// Joins `country_code` and `phone_number` and checks the result.
///
/// # Errors
/// Returns [`ValidationError::InvalidFormat`] when the concatenation is not
/// `+` followed by a non-zero digit and 7 to 11 further digits.
pub fn validate(country_code: &str, phone_number: &str) -> Result<ValidatedPhone, ValidationError> {
    let joined = format!("{country_code}{phone_number}");
    if PHONE_PATTERN.is_match(&joined) {
        Ok(ValidatedPhone(joined))
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_mobile_is_valid() {
        let phone = validate("+82", "1012345678").unwrap();
        assert_eq!(phone.as_str(), "+821012345678");
        assert_eq!(phone.as_str().len(), 13);
    }

    #[test]
    fn test_too_short_is_invalid() {
        assert_eq!(validate("+82", "1"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_empty_number_is_invalid() {
        assert_eq!(validate("+82", ""), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_length_bounds() {
        // One leading digit plus 7 more is the minimum.
        assert!(validate("+1", "2345678").is_ok());
        assert!(validate("+1", "234567").is_err());
        // One leading digit plus 11 more is the maximum.
        assert!(validate("+1", "23456789012").is_ok());
        assert!(validate("+1", "234567890123").is_err());
    }

    #[test]
    fn test_leading_zero_after_plus_is_invalid() {
        assert!(validate("+0", "1012345678").is_err());
    }

    #[test]
    fn test_missing_plus_is_invalid() {
        assert!(validate("82", "1012345678").is_err());
    }

    #[test]
    fn test_separators_are_rejected() {
        assert!(validate("+82", "10-1234-5678").is_err());
        assert!(validate("+82", "10 1234 5678").is_err());
        assert!(validate("+82", "1012345678\n").is_err());
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        assert!(validate("+82", "１０１２３４５６７８").is_err());
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ValidationError::InvalidFormat.code(), "invalid_format");
        assert_eq!(ValidationError::InvalidFormat.to_string(), "invalid_format");
    }

    #[test]
    fn test_redacted_keeps_last_four() {
        let phone = validate("+82", "1012345678").unwrap();
        assert_eq!(phone.redacted(), "***5678");
    }
}
