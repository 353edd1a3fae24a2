//! Form input helpers: field validation, phone/NIC/email checks,
//! biometric result mapping and font fallback resolution.

pub mod biometric;
pub mod config;
pub mod consts;
pub mod fonts;
pub mod utils;
pub mod validation;

pub use validation::{
    format_mobile_number, should_validate_nic, should_validate_text, validate_email,
    validate_mobile_number, validate_required_fields, CheckOption, DataSlot, EmailAddress,
    FieldDisplay, FormField, InvalidInput, MobileNumber, NicNumber,
};
