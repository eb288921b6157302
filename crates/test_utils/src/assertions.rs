//! Custom Test Assertions
//!
//! Assertion helpers for validation results that print every field error
//! on failure instead of an opaque `Err(..)`.

use domain_signup::{SignupApplication, SignupField, ValidationErrors};

/// Asserts that validation succeeded and returns the application
///
/// # Panics
///
/// Panics with the full error list if validation failed
pub fn assert_valid(result: Result<SignupApplication, ValidationErrors>) -> SignupApplication {
    match result {
        Ok(application) => application,
        Err(errors) => panic!("Expected a valid form, got errors: {}", errors),
    }
}

/// Asserts that validation failed with the given message on a field
///
/// # Panics
///
/// Panics if validation succeeded or the field's message differs
pub fn assert_field_error(
    result: &Result<SignupApplication, ValidationErrors>,
    field: SignupField,
    expected: &str,
) {
    match result {
        Ok(application) => panic!(
            "Expected error on {}, but form validated: {:?}",
            field, application
        ),
        Err(errors) => assert_eq!(
            errors.get(field),
            Some(expected),
            "Unexpected message for {}; all errors: {}",
            field,
            errors
        ),
    }
}

/// Asserts that validation failed on exactly these fields
pub fn assert_error_fields(
    result: &Result<SignupApplication, ValidationErrors>,
    expected: &[SignupField],
) {
    let errors = match result {
        Ok(application) => panic!("Expected errors, but form validated: {:?}", application),
        Err(errors) => errors,
    };

    let mut expected = expected.to_vec();
    expected.sort();
    assert_eq!(errors.fields(), expected, "All errors: {}", errors);
}

/// Asserts that an HTML body shows a field's error message
pub fn assert_html_field_error(html: &str, field: SignupField, message: &str) {
    let needle = format!(
        "<span class=\"error\" id=\"{}-error\">{}</span>",
        field.as_str(),
        message
    );
    assert!(
        html.contains(&needle),
        "Expected {} error {:?} in page",
        field,
        message
    );
}
