//! National Identity Card number checks.
//!
//! Two formats are accepted: nine digits followed by a `V` or `X` letter
//! (either case), and twelve digits.

use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{InputKind, InvalidInput};
use crate::consts::MAX_NIC_LENGTH;

static OLD_NIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{9}[VXvx]$").expect("Failed to compile NIC regex")
});

static NEW_NIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{12}$").expect("Failed to compile NIC regex")
});

static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-uwyz\D]").expect("Failed to compile non-digit regex")
});

static NIC_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[VXvx]").expect("Failed to compile NIC letter regex")
});

fn is_complete_nic(text: &str) -> bool {
    OLD_NIC_REGEX.is_match(text) || NEW_NIC_REGEX.is_match(text)
}

/// Decides whether an edit to a NIC field should be applied.
///
/// `changed` is the text being inserted (empty for a deletion) and `text` the
/// content of the field. Returns false once the field holds a complete NIC,
/// for letters other than `V`/`X`, and when the length limit is reached.
pub fn should_validate_nic(changed: &str, text: &str) -> bool {
    if changed.is_empty() {
        return true;
    }
    if is_complete_nic(text) {
        return false;
    }
    if NON_DIGIT_REGEX.is_match(changed) && !NIC_LETTER_REGEX.is_match(changed) {
        return false;
    }
    text.chars().count() < MAX_NIC_LENGTH
}

/// Wrapper type for a complete NIC number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct NicNumber(String);

impl TryFrom<String> for NicNumber {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_complete_nic(&value) {
            Ok(NicNumber(value))
        } else {
            Err(InvalidInput(InputKind::Nic))
        }
    }
}

impl TryFrom<&str> for NicNumber {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NicNumber::try_from(value.to_string())
    }
}

impl AsRef<str> for NicNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
