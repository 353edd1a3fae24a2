//! Integration tests for required-field validation
//!
//! These tests drive the validator with a recording display to check that
//! every offending field receives exactly one invalid cue and one message.

use std::collections::HashMap;

use formguard::consts::{ERROR_FIELD_REQUIRED, ERROR_REQUIRED_DATA};
use formguard::utils::localization::{IdentityLocalizer, TableLocalizer};
use formguard::{validate_required_fields, DataSlot, FieldDisplay, FormField};

struct Input {
    id: &'static str,
    text: &'static str,
}

struct Label {
    id: &'static str,
    text_input: bool,
}

impl FormField for Input {
    fn text(&self) -> Option<&str> {
        Some(self.text)
    }
}

impl FormField for Label {
    fn text(&self) -> Option<&str> {
        None
    }

    fn is_text_input(&self) -> bool {
        self.text_input
    }
}

#[derive(Default)]
struct Recorder {
    marked: Vec<&'static str>,
    errors: Vec<(&'static str, String)>,
}

impl FieldDisplay<Input> for Recorder {
    fn mark_invalid(&mut self, field: &Input) {
        self.marked.push(field.id);
    }

    fn set_error(&mut self, field: &Input, message: &str) {
        self.errors.push((field.id, message.to_string()));
    }
}

impl FieldDisplay<Label> for Recorder {
    fn mark_invalid(&mut self, field: &Label) {
        self.marked.push(field.id);
    }

    fn set_error(&mut self, field: &Label, message: &str) {
        self.errors.push((field.id, message.to_string()));
    }
}

fn inputs(texts: &[(&'static str, &'static str)]) -> Vec<Input> {
    texts.iter().map(|&(id, text)| Input { id, text }).collect()
}

#[test]
fn test_complete_form_passes_without_side_effects() {
    let fields = inputs(&[("name", "Kamal"), ("email", "kamal@example.lk")]);
    let city = Label { id: "city", text_input: true };
    let data = [DataSlot::new(true, &city)];
    let mut display = Recorder::default();

    let valid = validate_required_fields(Some(&fields[..]), &[], &data, &mut display, &IdentityLocalizer);

    assert!(valid, "Complete form was rejected");
    assert!(display.marked.is_empty());
    assert!(display.errors.is_empty());
}

#[test]
fn test_empty_field_reported_once_with_indexed_message() {
    let fields = inputs(&[("name", "Kamal"), ("email", ""), ("phone", "")]);
    let errors = [None, Some("Error_Email_Required"), None];
    let data: [DataSlot<'_, Label>; 0] = [];
    let mut display = Recorder::default();

    let valid = validate_required_fields(Some(&fields[..]), &errors, &data, &mut display, &IdentityLocalizer);

    assert!(!valid, "Form with empty fields was accepted");
    assert_eq!(display.marked, vec!["email", "phone"]);
    assert_eq!(
        display.errors,
        vec![
            ("email", "Error_Email_Required".to_string()),
            ("phone", ERROR_FIELD_REQUIRED.to_string()),
        ]
    );
}

#[test]
fn test_missing_data_object_fails_form() {
    let fields = inputs(&[("name", "Kamal")]);
    let city = Label { id: "city", text_input: true };
    let photo = Label { id: "photo", text_input: false };
    let district = Label { id: "district", text_input: true };
    let data = [
        DataSlot::new(false, &city),
        DataSlot::new(false, &photo),
        DataSlot::new(true, &district),
    ];
    let mut display = Recorder::default();

    let valid = validate_required_fields(Some(&fields[..]), &[], &data, &mut display, &IdentityLocalizer);

    assert!(!valid, "Form with a missing data object was accepted");
    assert_eq!(display.marked, vec!["city", "photo"]);
    // only text inputs can show a message
    assert_eq!(display.errors, vec![("city", ERROR_REQUIRED_DATA.to_string())]);
}

#[test]
fn test_slot_message_is_localized() {
    let fields = inputs(&[("name", "")]);
    let city = Label { id: "city", text_input: true };
    let data = [DataSlot::new(false, &city).with_error("Error_City_Required")];

    let mut translations = HashMap::new();
    translations.insert(ERROR_FIELD_REQUIRED.to_string(), "This field is required".to_string());
    translations.insert("Error_City_Required".to_string(), "Pick a city".to_string());
    let localizer = TableLocalizer::new(translations);
    let mut display = Recorder::default();

    let valid = validate_required_fields(Some(&fields[..]), &[], &data, &mut display, &localizer);

    assert!(!valid);
    assert_eq!(
        display.errors,
        vec![
            ("name", "This field is required".to_string()),
            ("city", "Pick a city".to_string()),
        ]
    );
}

#[test]
fn test_objects_only_validation_is_rejected() {
    let city = Label { id: "city", text_input: true };
    let data = [DataSlot::new(true, &city)];
    let mut display = Recorder::default();

    let valid = validate_required_fields::<Input, _, _, _>(None, &[], &data, &mut display, &IdentityLocalizer);

    assert!(!valid, "Objects-only validation was accepted");
    assert!(display.marked.is_empty());
}
