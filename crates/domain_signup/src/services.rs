//! Signup domain services
//!
//! Orchestrates a single signup attempt: validate, then deliver.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::SignupApplication;
use crate::error::SignupError;
use crate::form::RawSignupForm;
use crate::ports::{SignupPort, SubmissionReceipt};
use crate::validation::SignupValidator;

/// Outcome of an accepted signup
#[derive(Debug, Clone)]
pub struct AcceptedSignup {
    /// Identifier of this attempt, for correlating logs
    pub attempt_id: Uuid,
    /// The application that was delivered
    pub application: SignupApplication,
    /// Backend acknowledgement
    pub receipt: SubmissionReceipt,
}

/// Service handling signup submissions
///
/// Each call validates the raw form and, only if it is valid, makes exactly
/// one call to the configured [`SignupPort`]. Concurrent calls are not
/// coordinated; overlapping submissions each reach the backend.
pub struct SignupService {
    validator: SignupValidator,
    port: Arc<dyn SignupPort>,
}

impl SignupService {
    /// Creates a service with the standard validation rules
    pub fn new(port: Arc<dyn SignupPort>) -> Self {
        Self::with_validator(SignupValidator::new(), port)
    }

    /// Creates a service with a custom validator
    pub fn with_validator(validator: SignupValidator, port: Arc<dyn SignupPort>) -> Self {
        Self { validator, port }
    }

    /// Returns the validator used by this service
    pub fn validator(&self) -> &SignupValidator {
        &self.validator
    }

    /// Validates and submits a signup form
    ///
    /// # Errors
    ///
    /// - `SignupError::Invalid` if any field or cross-field rule fails; the
    ///   backend is not called
    /// - `SignupError::Submission` if the backend call fails
    pub async fn submit(&self, raw: &RawSignupForm) -> Result<AcceptedSignup, SignupError> {
        let attempt_id = Uuid::new_v4();

        let application = self.validator.validate(raw).map_err(|errors| {
            tracing::info!(%attempt_id, error_count = errors.len(), "Signup failed validation");
            SignupError::Invalid(errors)
        })?;

        tracing::info!(
            %attempt_id,
            adapter = self.port.adapter_id(),
            previous_loan = application.previous_loan,
            "Submitting signup"
        );

        let receipt = self.port.submit(&application).await.map_err(|e| {
            tracing::error!(%attempt_id, error = %e, "Signup submission failed");
            SignupError::Submission(e)
        })?;

        Ok(AcceptedSignup {
            attempt_id,
            application,
            receipt,
        })
    }
}

impl std::fmt::Debug for SignupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupService")
            .field("validator", &self.validator)
            .field("port", &self.port.adapter_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SignupField;
    use crate::ports::mock::{MockFailure, MockSignupPort};
    use reqwest::StatusCode;

    fn form() -> RawSignupForm {
        RawSignupForm {
            name: Some("Jo".to_string()),
            email: Some("jo@x.com".to_string()),
            phone: Some("1234567890".to_string()),
            residence_type: Some("Other".to_string()),
            monthly_income: Some("5000".to_string()),
            previous_loan: Some("No".to_string()),
            loan_amount: Some("".to_string()),
            marital_status: Some("Divorced".to_string()),
            number_of_dependents: Some("1".to_string()),
            city: Some("X".to_string()),
            state: Some("Y".to_string()),
            zip_code: Some("".to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_form_is_submitted_once() {
        let port = MockSignupPort::new();
        let service = SignupService::new(Arc::new(port.clone()));

        let accepted = service.submit(&form()).await.unwrap();

        assert_eq!(accepted.receipt.status, 201);
        assert_eq!(accepted.application.zip_code, None);
        assert_eq!(port.submission_count().await, 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        let port = MockSignupPort::new();
        let service = SignupService::new(Arc::new(port.clone()));

        let mut raw = form();
        raw.email = Some("".to_string());

        let err = service.submit(&raw).await.unwrap_err();
        let errors = err.validation_errors().expect("validation failure");
        assert!(errors.contains(SignupField::Email));
        assert_eq!(port.submission_count().await, 0);
    }

    #[tokio::test]
    async fn test_backend_failure_is_surfaced() {
        let port = MockSignupPort::failing(MockFailure::Status(StatusCode::INTERNAL_SERVER_ERROR));
        let service = SignupService::new(Arc::new(port.clone()));

        let err = service.submit(&form()).await.unwrap_err();
        assert!(matches!(err, SignupError::Submission(_)));
        assert_eq!(port.submission_count().await, 1);
    }
}
