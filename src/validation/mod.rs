//! Root module for the validation helpers.
//! Exposes the public API for form input validation.

mod email;
mod fields;
mod mobile;
mod nic;
mod text;

use derive_more::Display;
use thiserror::Error;

pub use email::{validate_email, EmailAddress};
pub use fields::{validate_required_fields, DataSlot, FieldDisplay, FormField};
pub use mobile::{format_mobile_number, validate_mobile_number, MobileNumber};
pub use nic::{should_validate_nic, NicNumber};
pub use text::{should_validate_text, CheckOption};

/// Kind of input a validated wrapper type was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputKind {
    #[display("email address")]
    Email,
    #[display("mobile number")]
    MobileNumber,
    #[display("NIC number")]
    Nic,
}

/// Returned when a wrapper type rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {0}")]
pub struct InvalidInput(pub InputKind);
