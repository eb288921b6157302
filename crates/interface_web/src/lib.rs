//! HTTP Front End
//!
//! This crate serves the EasyApply marketing page and loan signup form
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each page
//! - **Pages**: Server-rendered HTML
//! - **Middleware**: Request logging
//! - **Error Handling**: Consistent error responses
//!
//! # Routes
//!
//! - `GET /` - landing page
//! - `GET /signup` - signup form
//! - `POST /signup` - validate and submit the form
//! - `GET /health` - health probe
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_web::create_router;
//!
//! let app = create_router(Arc::new(backend));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod pages;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_signup::{SignupPort, SignupService};

use crate::handlers::{health, home, signup};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub signup: Arc<SignupService>,
}

/// Creates the web router
///
/// # Arguments
///
/// * `port` - Backend the signup form submits to
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(port: Arc<dyn SignupPort>) -> Router {
    let state = AppState {
        signup: Arc::new(SignupService::new(port)),
    };

    Router::new()
        .route("/", get(home::landing_page))
        .route("/signup", get(signup::signup_form).post(signup::submit_signup))
        .route("/health", get(health::health_check))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_log_middleware))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
