//! Helpers shared by the validators: scalar classification and
//! message localization.

pub mod localization;
pub mod unicode;
