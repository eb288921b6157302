//! Web error handling
//!
//! Validation and backend failures on the signup form are rendered as HTML
//! pages by the signup handler. `WebError` covers everything else: unknown
//! routes and unreadable request bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Web error types
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl WebError {
    /// Status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (error_type, message) = match &self {
            WebError::NotFound(msg) => ("not_found", msg.clone()),
            WebError::BadRequest(msg) => ("bad_request", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<axum::extract::rejection::FormRejection> for WebError {
    fn from(rejection: axum::extract::rejection::FormRejection) -> Self {
        WebError::BadRequest(rejection.body_text())
    }
}
