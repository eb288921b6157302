//! HTTP Signup Backend Adapter
//!
//! Delivers applications to the lending backend as a JSON `POST`.
//!
//! # Error Handling
//!
//! Backend outcomes are mapped to `SubmissionError` variants:
//! - connection refused, reset, DNS failure -> `SubmissionError::Transport`
//! - any non-2xx status -> `SubmissionError::Rejected`
//! - 2xx with a body that is not JSON -> `SubmissionError::InvalidResponse`
//!
//! A 2xx with an empty body is accepted and recorded as `null`.
//!
//! Each call is a single at-most-once attempt, with no retry and no
//! request timeout.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Instant;

use crate::application::SignupApplication;
use crate::error::SubmissionError;
use crate::ports::{SignupPort, SubmissionReceipt};

/// Endpoint used when none is configured
pub const DEFAULT_SIGNUP_ENDPOINT: &str = "http://localhost:4000/api/signup";

/// Configuration for the HTTP signup backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
    /// Full URL applications are POSTed to
    pub endpoint: String,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SIGNUP_ENDPOINT.to_string(),
        }
    }
}

/// Signup port backed by the lending backend's HTTP API
///
/// The inner `reqwest::Client` pools connections, so one adapter should be
/// shared across requests.
#[derive(Debug, Clone)]
pub struct HttpSignupBackend {
    config: HttpBackendConfig,
    client: Client,
}

impl HttpSignupBackend {
    /// Creates a backend adapter with a fresh HTTP client
    pub fn new(config: HttpBackendConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a backend adapter using an existing HTTP client
    pub fn with_client(config: HttpBackendConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Returns the endpoint applications are sent to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl SignupPort for HttpSignupBackend {
    async fn submit(
        &self,
        application: &SignupApplication,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(application)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.config.endpoint, error = %e, "Signup backend unreachable");
                SubmissionError::from(e)
            })?;

        let status = response.status();
        let text = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.config.endpoint,
                status = status.as_u16(),
                latency_ms,
                "Signup backend rejected application"
            );
            return Err(SubmissionError::Rejected { status, body: text });
        }

        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?
        };

        tracing::info!(status = status.as_u16(), latency_ms, "Signup delivered");

        Ok(SubmissionReceipt {
            status: status.as_u16(),
            body,
            submitted_at: Utc::now(),
        })
    }

    fn adapter_id(&self) -> &'static str {
        "http-signup-backend"
    }
}
