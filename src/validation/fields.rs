//! Required-field validation for forms.
//!
//! The UI layer owns the fields; this module only reads their text and
//! reports offending fields through a [`FieldDisplay`] capability.

use log::debug;

use crate::consts::{ERROR_FIELD_REQUIRED, ERROR_REQUIRED_DATA};
use crate::utils::localization::Localizer;

/// A form element the validator can read.
pub trait FormField {
    /// Text currently shown by the field, if any.
    fn text(&self) -> Option<&str>;

    /// Whether the element can show an error message.
    /// Non-text targets only receive the invalid cue.
    fn is_text_input(&self) -> bool {
        true
    }
}

/// Visual feedback applied by the UI layer to invalid fields.
pub trait FieldDisplay<F: ?Sized> {
    /// Visual "invalid" cue, e.g. a shake animation.
    fn mark_invalid(&mut self, field: &F);

    fn set_error(&mut self, field: &F, message: &str);
}

/// A data object that must be present, with the element displaying it.
#[derive(Debug)]
pub struct DataSlot<'a, T: ?Sized> {
    pub present: bool,
    pub target: &'a T,
    /// Message key used instead of the generic one when the object is missing.
    pub error: Option<&'a str>,
}

impl<'a, T: ?Sized> DataSlot<'a, T> {
    pub fn new(present: bool, target: &'a T) -> Self {
        Self { present, target, error: None }
    }

    pub fn with_error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }
}

fn is_blank<F: FormField + ?Sized>(field: &F) -> bool {
    field.text().map_or(true, str::is_empty)
}

/// Checks that every editable field has text and every data object is present.
///
/// Empty fields and missing objects are marked invalid through `display`, and
/// receive their message from `editable_errors` (aligned by index) or from the
/// slot, falling back to the generic required-field keys. Messages are resolved
/// through `localizer` before being displayed.
///
/// Returns false without touching the display when no editable field is given.
pub fn validate_required_fields<F, T, D, L>(
    editable: Option<&[F]>,
    editable_errors: &[Option<&str>],
    data: &[DataSlot<'_, T>],
    display: &mut D,
    localizer: &L,
) -> bool
where
    F: FormField,
    T: FormField + ?Sized,
    D: FieldDisplay<F> + FieldDisplay<T> + ?Sized,
    L: Localizer + ?Sized,
{
    let fields = match editable {
        Some(fields) if !fields.is_empty() => fields,
        _ => {
            debug!("no editable fields given, rejecting form");
            return false;
        }
    };

    // Computed for diagnostics only, it does not change the outcome.
    if fields.iter().all(is_blank) {
        debug!("every editable field is empty");
    }

    for (index, field) in fields.iter().enumerate().filter(|(_, field)| is_blank(*field)) {
        FieldDisplay::<F>::mark_invalid(&mut *display, field);
        let key = editable_errors
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(ERROR_FIELD_REQUIRED);
        FieldDisplay::<F>::set_error(&mut *display, field, &localizer.localize(key));
    }

    let mut validated = fields.iter().all(|field| !is_blank(field));

    for slot in data.iter().filter(|slot| !slot.present) {
        FieldDisplay::<T>::mark_invalid(&mut *display, slot.target);
        if slot.target.is_text_input() {
            let key = slot.error.unwrap_or(ERROR_REQUIRED_DATA);
            FieldDisplay::<T>::set_error(&mut *display, slot.target, &localizer.localize(key));
        }
        validated = false;
    }

    debug!("required field validation result: {}", validated);
    validated
}
