//! Loan Signup Domain
//!
//! This crate holds everything about a loan signup that is independent of
//! how the form is rendered: the applicant record, the rules it must pass,
//! and the port used to hand it to the lending backend.
//!
//! # Flow
//!
//! ```text
//! RawSignupForm ──normalize──▶ field checks ──▶ cross-field rules ──▶ SignupApplication
//!                                                                        │
//!                                                          SignupPort::submit (one POST)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use domain_signup::{RawSignupForm, SignupField, SignupValidator};
//!
//! let raw = RawSignupForm {
//!     name: Some("Jo".to_string()),
//!     email: Some("jo@x.com".to_string()),
//!     phone: Some("1234567890".to_string()),
//!     residence_type: Some("Owned".to_string()),
//!     monthly_income: Some("5000".to_string()),
//!     previous_loan: Some("true".to_string()),
//!     loan_amount: Some("0".to_string()),
//!     marital_status: Some("Single".to_string()),
//!     number_of_dependents: Some("0".to_string()),
//!     city: Some("X".to_string()),
//!     state: Some("Y".to_string()),
//!     zip_code: Some("12345".to_string()),
//! };
//!
//! let errors = SignupValidator::new().validate(&raw).unwrap_err();
//! assert_eq!(
//!     errors.get(SignupField::LoanAmount),
//!     Some("Loan amount must be greater than 0"),
//! );
//! ```

pub mod application;
pub mod form;
pub mod validation;
pub mod error;
pub mod ports;
pub mod adapters;
pub mod services;

pub use application::{SignupApplication, ResidenceType, MaritalStatus, SignupField};
pub use form::RawSignupForm;
pub use validation::{
    SignupValidator, ValidationErrors, FieldError, CrossFieldRule, ParsedFields,
    PreviousLoanRequiresAmount,
};
pub use error::{SignupError, SubmissionError, UnknownVariant};
pub use ports::{SignupPort, SubmissionReceipt};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockSignupPort, MockFailure};
pub use adapters::{HttpSignupBackend, HttpBackendConfig, DEFAULT_SIGNUP_ENDPOINT};
pub use services::{SignupService, AcceptedSignup};
