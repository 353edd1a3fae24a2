//! Message localization capability.
//!
//! The validators never render text themselves: message keys are resolved
//! through a [`Localizer`] before being handed to the UI layer.

use std::borrow::Cow;
use std::collections::HashMap;

/// Resolves a message key to the string displayed to the user.
pub trait Localizer {
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Returns every key unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Looks keys up in a translation table, falling back to the key itself.
#[derive(Debug, Default, Clone)]
pub struct TableLocalizer {
    translations: HashMap<String, String>,
}

impl TableLocalizer {
    pub fn new(translations: HashMap<String, String>) -> Self {
        Self { translations }
    }
}

impl Localizer for TableLocalizer {
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.translations.get(key) {
            Some(translated) => Cow::Borrowed(translated.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}
