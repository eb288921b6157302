//! Signup Backend Adapters
//!
//! Implementations of [`SignupPort`](crate::ports::SignupPort) that talk to
//! real systems. The in-memory mock lives in [`crate::ports::mock`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_signup::adapters::{HttpBackendConfig, HttpSignupBackend};
//! use domain_signup::SignupPort;
//! use std::sync::Arc;
//!
//! let backend = HttpSignupBackend::new(HttpBackendConfig {
//!     endpoint: "http://localhost:4000/api/signup".to_string(),
//! });
//! let port: Arc<dyn SignupPort> = Arc::new(backend);
//! ```

pub mod http_backend;

pub use http_backend::{HttpBackendConfig, HttpSignupBackend, DEFAULT_SIGNUP_ENDPOINT};
