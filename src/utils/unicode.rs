//! Unicode scalar classification used by the text validators.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

// Unicode decimal digits (Nd), not every numeric character
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d").expect("Failed to compile digit regex")
});

/// Blocks whose scalars are treated as emoji.
const EMOJI_RANGES: [RangeInclusive<u32>; 12] = [
    0x1F600..=0x1F64F, // emoticons
    0x1F300..=0x1F5FF, // symbols and pictographs
    0x1F680..=0x1F6FF, // transport and map
    0x1F1E6..=0x1F1FF, // regional indicators
    0x2600..=0x26FF,   // miscellaneous symbols
    0x2700..=0x27BF,   // dingbats
    0xE0020..=0xE007F, // tags
    0xFE00..=0xFE0F,   // variation selectors
    0x1F900..=0x1F9FF, // supplemental symbols and pictographs
    0x1FA70..=0x1FAFF, // symbols and pictographs extended-A
    0x1F018..=0x1F270, // enclosed characters
    0x20D0..=0x20FF,   // combining marks for symbols
];

/// Returns true if `c` belongs to one of the emoji blocks.
pub fn is_emoji(c: char) -> bool {
    let value = c as u32;
    EMOJI_RANGES.iter().any(|range| range.contains(&value))
}

pub fn contains_emoji(s: &str) -> bool {
    s.chars().any(is_emoji)
}

pub fn contains_digit(s: &str) -> bool {
    DIGIT_REGEX.is_match(s)
}

/// Horizontal whitespace: tab and the space separators. Line breaks do not count.
pub fn is_horizontal_whitespace(c: char) -> bool {
    c == '\t'
        || (c.is_whitespace()
            && !matches!(
                c,
                '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
            ))
}

pub fn contains_whitespace(s: &str) -> bool {
    s.chars().any(is_horizontal_whitespace)
}

/// Checks whether the first scalar of `s` lies in any of `ranges`.
/// An empty string never matches.
pub fn first_scalar_in(s: &str, ranges: &[RangeInclusive<u32>]) -> bool {
    match s.chars().next() {
        Some(first) => ranges.iter().any(|range| range.contains(&(first as u32))),
        None => false,
    }
}
