//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! signup test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built forms and applications
//! - `builders`: Builder for raw signup forms, including form-encoded bodies
//! - `assertions`: Assertion helpers for validation results
//! - `generators`: Property-based and fake-data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
