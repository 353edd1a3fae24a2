//! Character-class checks for free text fields.

use std::ops::RangeInclusive;

use derive_more::Display;
use log::trace;
use strum_macros::EnumIter;

use crate::consts::{LATIN_LOWERCASE_RANGE, LATIN_UPPERCASE_RANGE, SINHALA_RANGE};
use crate::utils::unicode::{contains_digit, contains_emoji, contains_whitespace, first_scalar_in};

/// A single constraint that can be combined with others in [`should_validate_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum CheckOption {
    #[display("Sinhala script")]
    Sinhala,
    #[display("English uppercase")]
    EnglishUppercase,
    #[display("English lowercase")]
    EnglishLowercase,
    #[display("Emoji required")]
    EmojiInclude,
    #[display("Emoji excluded")]
    EmojiExclude,
    #[display("Digits required")]
    DigitsInclude,
    #[display("Digits excluded")]
    DigitsExclude,
    #[display("Whitespace allowed")]
    WhitespaceAllowed,
}

impl CheckOption {
    /// Script range selected by this option, if it is a script option.
    fn script_range(self) -> Option<RangeInclusive<u32>> {
        match self {
            CheckOption::Sinhala => Some(SINHALA_RANGE),
            CheckOption::EnglishUppercase => Some(LATIN_UPPERCASE_RANGE),
            CheckOption::EnglishLowercase => Some(LATIN_LOWERCASE_RANGE),
            _ => None,
        }
    }

    /// Evaluates the emoji/digit criterion of this option against `s`.
    fn criterion(self, s: &str) -> Option<bool> {
        match self {
            CheckOption::EmojiInclude => Some(contains_emoji(s)),
            CheckOption::EmojiExclude => Some(!contains_emoji(s)),
            CheckOption::DigitsInclude => Some(contains_digit(s)),
            CheckOption::DigitsExclude => Some(!contains_digit(s)),
            _ => None,
        }
    }
}

/// Decides whether `s` is acceptable under `options`.
///
/// Script options only look at the first scalar of the string. Emoji and digit
/// options are independent criteria, any one of which is enough. A string
/// containing horizontal whitespace is always accepted.
pub fn should_validate_text(s: &str, options: &[CheckOption]) -> bool {
    let ranges: Vec<RangeInclusive<u32>> = options.iter().filter_map(|o| o.script_range()).collect();
    let criteria: Vec<bool> = options.iter().filter_map(|o| o.criterion(s)).collect();

    let include_passed = first_scalar_in(s, &ranges);
    let other_passed = criteria.iter().any(|&passed| passed);
    let whitespace = contains_whitespace(s);

    trace!(
        "text check for {:?}: include={} other={} whitespace={}",
        s,
        include_passed,
        other_passed,
        whitespace
    );

    if ranges.is_empty() {
        return other_passed || whitespace;
    }
    include_passed || other_passed || whitespace
}
