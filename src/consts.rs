//! Constants shared by the validators.

use std::ops::RangeInclusive;

/// Message key used when an empty editable field has no explicit message.
pub const ERROR_FIELD_REQUIRED: &str = "Error_Field_Required";
/// Message key used when a missing data object has no explicit message.
pub const ERROR_REQUIRED_DATA: &str = "Error_Required_Data";

pub const SINHALA_RANGE: RangeInclusive<u32> = 0x0D80..=0x0DFF;
pub const LATIN_UPPERCASE_RANGE: RangeInclusive<u32> = 0x0041..=0x005A;
pub const LATIN_LOWERCASE_RANGE: RangeInclusive<u32> = 0x0061..=0x007A;

/// Number of characters after which a NIC field stops accepting input.
pub const MAX_NIC_LENGTH: usize = 12;

/// Length limits (exclusive) for a mobile number being typed, by prefix.
pub const MOBILE_LENGTH_LIMITS: [(&str, usize); 4] = [("+94", 12), ("94", 11), ("0", 10), ("7", 9)];
/// Limit applied while no known prefix has been typed yet.
pub const MOBILE_DEFAULT_LENGTH_LIMIT: usize = 12;

/// Reason shown by the platform when asking for biometric authentication.
pub const DEFAULT_AUTH_REASON: &str = "Access requires authentication";

/// Size used to probe the font catalog when resolving fallbacks.
pub const FONT_PROBE_SIZE: f64 = 12.0;

/// Environment variable naming the JSON settings file.
pub const CONFIG_ENV_VAR: &str = "FORMGUARD_CONFIG";
