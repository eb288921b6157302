//! Request handlers

pub mod health;
pub mod home;
pub mod signup;

use axum::http::Uri;

use crate::error::WebError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound(format!("No page at {}", uri.path()))
}
