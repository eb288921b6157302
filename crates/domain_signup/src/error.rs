//! Signup domain errors
//!
//! Validation failures are not errors in this sense: they are returned as
//! [`ValidationErrors`](crate::validation::ValidationErrors) so the form can
//! show them next to each control. The types here cover variant parsing and
//! delivery to the backend.

use reqwest::StatusCode;
use thiserror::Error;

use crate::application::SignupField;
use crate::validation::ValidationErrors;

/// Value is not one of a field's allowed variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown value {value:?} for {field}")]
pub struct UnknownVariant {
    pub field: SignupField,
    pub value: String,
}

/// Errors that can occur while processing a signup
#[derive(Debug, Error)]
pub enum SignupError {
    /// Application failed validation; nothing was sent
    #[error("Signup validation failed: {0}")]
    Invalid(ValidationErrors),

    /// Application was valid but delivery failed
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl SignupError {
    /// Returns the validation errors if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SignupError::Invalid(errors) => Some(errors),
            SignupError::Submission(_) => None,
        }
    }
}

impl From<ValidationErrors> for SignupError {
    fn from(errors: ValidationErrors) -> Self {
        SignupError::Invalid(errors)
    }
}

/// Errors that can occur while delivering an application to the backend
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The backend could not be reached or the connection broke
    #[error("Signup backend unreachable: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The backend answered with a non-success status
    #[error("Signup rejected with status {status}")]
    Rejected { status: StatusCode, body: String },

    /// The backend answered 2xx but the body was not JSON
    #[error("Invalid response from signup backend: {0}")]
    InvalidResponse(String),
}

impl SubmissionError {
    /// Creates a Transport error without an underlying source
    pub fn transport(message: impl Into<String>) -> Self {
        SubmissionError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the backend status code, if the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmissionError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for display to the applicant
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Transport { .. } => {
                "We could not reach our servers. Please check your connection and try again."
            }
            SubmissionError::Rejected { status, .. } if status.is_client_error() => {
                "Your application could not be accepted. Please review your details and try again."
            }
            _ => "Something went wrong while submitting your application. Please try again.",
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
