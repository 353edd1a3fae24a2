use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{InputKind, InvalidInput};

// Local part, domain and suffix: no whitespace, '@', parentheses or backslash
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@()\\]+@[^\s@()\\]+\.[^\s@()\\]+$")
        .expect("Failed to compile email regex")
});

/// Returns true if `email` looks like `local@domain.suffix`.
/// The input is matched as is, without trimming or case folding.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Wrapper type for an email address that has been validated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct EmailAddress(String);

impl TryFrom<String> for EmailAddress {
    type Error = InvalidInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if validate_email(&email) {
            Ok(Self(email))
        } else {
            Err(InvalidInput(InputKind::Email))
        }
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = InvalidInput;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        Self::try_from(email.to_owned())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
