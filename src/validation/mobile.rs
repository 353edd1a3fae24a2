//! Mobile number normalization and input length limits.
//!
//! Canonical numbers carry the `+94` country prefix followed by nine digits.

use derive_more::Display;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{InputKind, InvalidInput};
use crate::consts::{MOBILE_DEFAULT_LENGTH_LIMIT, MOBILE_LENGTH_LIMITS};

/// Ordered (pattern, replacement) table. An empty replacement marks a number
/// that is already canonical.
static MOBILE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"^0(\d{9})$", "+94$1"),
        (r"^(94\d{9})$", "+$1"),
        (r"^(7\d{8})$", "+94$1"),
        (r"^\+94\d{9}$", ""),
    ]
    .into_iter()
    .map(|(pattern, template)| {
        (
            Regex::new(pattern).expect("Failed to compile mobile number regex"),
            template,
        )
    })
    .collect()
});

fn normalize(text: &str) -> Option<String> {
    MOBILE_PATTERNS
        .iter()
        .find(|(regex, _)| regex.is_match(text))
        .map(|(regex, template)| {
            if template.is_empty() {
                text.to_string()
            } else {
                regex.replacen(text, 1, *template).into_owned()
            }
        })
}

/// Converts a local mobile number to its `+94` form.
///
/// Accepts numbers written as `0XXXXXXXXX`, `94XXXXXXXXX`, `7XXXXXXXX` or
/// already as `+94XXXXXXXXX`. When nothing matches, `on_failure` is called
/// once and `None` is returned.
pub fn format_mobile_number<F>(text: &str, on_failure: Option<F>) -> Option<String>
where
    F: FnOnce(),
{
    match normalize(text) {
        Some(formatted) => {
            debug!("Mobile Number: {}", formatted);
            Some(formatted)
        }
        None => {
            warn!("Mobile Number: Invalid Number");
            if let Some(callback) = on_failure {
                callback();
            }
            None
        }
    }
}

/// Decides whether `inserted` may be added to a mobile number field holding
/// `current`. Deletions are always accepted; otherwise the length limit
/// depends on the prefix typed so far.
pub fn validate_mobile_number(current: &str, inserted: &str) -> bool {
    if inserted.is_empty() {
        return true;
    }
    let limit = MOBILE_LENGTH_LIMITS
        .iter()
        .find(|(prefix, _)| current.starts_with(prefix))
        .map_or(MOBILE_DEFAULT_LENGTH_LIMIT, |&(_, limit)| limit);
    current.chars().count() < limit
}

/// Wrapper type for a mobile number in canonical `+94` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct MobileNumber(String);

impl TryFrom<&str> for MobileNumber {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        normalize(value)
            .map(MobileNumber)
            .ok_or(InvalidInput(InputKind::MobileNumber))
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MobileNumber::try_from(value.as_str())
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn format(text: &str) -> Option<String> {
        format_mobile_number::<fn()>(text, None)
    }

    #[test]
    fn test_formats_known_prefixes() {
        let cases = vec![
            ("0771234567", "+94771234567"),
            ("94771234567", "+94771234567"),
            ("771234567", "+94771234567"),
            ("+94771234567", "+94771234567"),
            ("0112345678", "+94112345678"),
        ];

        for (input, expected) in cases {
            assert_eq!(format(input).as_deref(), Some(expected), "Failed to format {}", input);
        }
    }

    #[test]
    fn test_canonical_number_is_unchanged() {
        let canonical = "+94712345678";
        let once = format(canonical).unwrap();
        assert_eq!(once, canonical);
        assert_eq!(format(&once).unwrap(), once);
    }

    #[test]
    fn test_unknown_numbers_invoke_callback_once() {
        let invalid_cases = vec![
            "12345",
            "",
            "077123456",
            "07712345678",
            "+9477123456",
            "+44771234567",
            "671234567",
            " 0771234567",
            "0771234567 ",
            "077-123-4567",
        ];

        for input in invalid_cases {
            let calls = Cell::new(0);
            let result = format_mobile_number(input, Some(|| calls.set(calls.get() + 1)));
            assert_eq!(result, None, "Invalid number {:?} was formatted", input);
            assert_eq!(calls.get(), 1, "Callback not called exactly once for {:?}", input);
        }
    }

    #[test]
    fn test_callback_not_invoked_on_success() {
        let calls = Cell::new(0);
        let result = format_mobile_number("0771234567", Some(|| calls.set(calls.get() + 1)));
        assert!(result.is_some());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_length_gate() {
        let cases = vec![
            ("+94771234567", "1", false),
            ("+9477123456", "7", true),
            ("94771234567", "1", false),
            ("9477123456", "7", true),
            ("0771234567", "1", false),
            ("077123456", "7", true),
            ("771234567", "1", false),
            ("77123456", "7", true),
            ("", "0", true),
            ("12345678901", "2", true),
            ("123456789012", "3", false),
        ];

        for (current, inserted, expected) in cases {
            assert_eq!(
                validate_mobile_number(current, inserted),
                expected,
                "Unexpected result inserting {:?} into {:?}",
                inserted,
                current
            );
        }
    }

    #[test]
    fn test_length_counts_chars() {
        // a combining mark adds a char without adding a grapheme
        assert!(!validate_mobile_number("77123456\u{0301}", "7"));
        assert!(validate_mobile_number("7712345\u{0301}", "7"));
    }

    #[test]
    fn test_deletion_always_accepted() {
        assert!(validate_mobile_number("+94771234567", ""));
        assert!(validate_mobile_number("0771234567890", ""));
    }

    #[test]
    fn test_mobile_wrapper() {
        let number = MobileNumber::try_from("0771234567").unwrap();
        assert_eq!(number.as_ref(), "+94771234567");
        assert_eq!(
            MobileNumber::try_from("12345"),
            Err(InvalidInput(InputKind::MobileNumber))
        );
    }
}
