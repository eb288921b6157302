//! Signup Port
//!
//! The port through which validated applications leave the system. The
//! signup flow only depends on the [`SignupPort`] trait, so the backend can
//! be swapped without touching validation or presentation:
//!
//! - **HTTP Adapter**: POSTs JSON to the lending backend
//!   ([`HttpSignupBackend`](crate::adapters::HttpSignupBackend))
//! - **Mock Adapter**: records submissions in memory for tests
//!
//! # Delivery
//!
//! One call to [`SignupPort::submit`] makes at most one delivery attempt.
//! Adapters do not retry, deduplicate, or attach idempotency keys.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_signup::ports::SignupPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn SignupPort> = Arc::new(HttpSignupBackend::new(config));
//! let receipt = port.submit(&application).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::SignupApplication;
use crate::error::SubmissionError;

/// Acknowledgement returned by the backend for an accepted application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    /// HTTP status returned by the backend
    pub status: u16,
    /// JSON body returned by the backend; its shape is not interpreted
    pub body: serde_json::Value,
    /// When the backend accepted the application
    pub submitted_at: DateTime<Utc>,
}

/// Delivers validated applications to the lending backend
#[async_trait]
pub trait SignupPort: Send + Sync {
    /// Submits an application
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the backend is unreachable, answers
    /// with a non-2xx status, or returns a body that is not JSON.
    async fn submit(
        &self,
        application: &SignupApplication,
    ) -> Result<SubmissionReceipt, SubmissionError>;

    /// Identifier used in logs
    fn adapter_id(&self) -> &'static str;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Failure a mock port should simulate
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MockFailure {
        /// Backend unreachable
        Transport,
        /// Backend answered with this status
        Status(StatusCode),
    }

    /// In-memory mock implementation of SignupPort
    #[derive(Debug, Default, Clone)]
    pub struct MockSignupPort {
        submissions: Arc<RwLock<Vec<SignupApplication>>>,
        failure: Arc<RwLock<Option<MockFailure>>>,
    }

    impl MockSignupPort {
        /// Creates a mock port that accepts every application
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock port that fails every submission
        pub fn failing(failure: MockFailure) -> Self {
            Self {
                submissions: Arc::default(),
                failure: Arc::new(RwLock::new(Some(failure))),
            }
        }

        /// Changes how subsequent submissions behave
        pub async fn set_failure(&self, failure: Option<MockFailure>) {
            *self.failure.write().await = failure;
        }

        /// Applications received so far, including failed attempts
        pub async fn submissions(&self) -> Vec<SignupApplication> {
            self.submissions.read().await.clone()
        }

        /// Number of submission attempts
        pub async fn submission_count(&self) -> usize {
            self.submissions.read().await.len()
        }
    }

    #[async_trait]
    impl SignupPort for MockSignupPort {
        async fn submit(
            &self,
            application: &SignupApplication,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            self.submissions.write().await.push(application.clone());

            match *self.failure.read().await {
                Some(MockFailure::Transport) => {
                    Err(SubmissionError::transport("mock backend unreachable"))
                }
                Some(MockFailure::Status(status)) => Err(SubmissionError::Rejected {
                    status,
                    body: String::new(),
                }),
                None => Ok(SubmissionReceipt {
                    status: 201,
                    body: serde_json::json!({ "ok": true }),
                    submitted_at: Utc::now(),
                }),
            }
        }

        fn adapter_id(&self) -> &'static str {
            "mock-signup-port"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockFailure, MockSignupPort};
    use super::*;
    use crate::application::{MaritalStatus, ResidenceType};
    use reqwest::StatusCode;
    use rust_decimal_macros::dec;

    fn application() -> SignupApplication {
        SignupApplication {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            residence_type: ResidenceType::Rented,
            monthly_income: dec!(3200),
            previous_loan: false,
            loan_amount: None,
            marital_status: MaritalStatus::Married,
            number_of_dependents: 2,
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: None,
        }
    }

    #[tokio::test]
    async fn test_mock_records_submissions() {
        let port = MockSignupPort::new();
        let receipt = port.submit(&application()).await.unwrap();

        assert_eq!(receipt.status, 201);
        assert_eq!(port.submission_count().await, 1);
        assert_eq!(port.submissions().await[0].city, "Austin");
    }

    #[tokio::test]
    async fn test_mock_failure_modes() {
        let port = MockSignupPort::failing(MockFailure::Status(StatusCode::CONFLICT));
        let err = port.submit(&application()).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));

        port.set_failure(Some(MockFailure::Transport)).await;
        let err = port.submit(&application()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Transport { .. }));

        port.set_failure(None).await;
        assert!(port.submit(&application()).await.is_ok());
        assert_eq!(port.submission_count().await, 3);
    }
}
