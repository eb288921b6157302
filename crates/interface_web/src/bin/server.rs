//! EasyApply - Web Server Binary
//!
//! This binary serves the landing page and signup form.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin easyapply-web
//!
//! # Point the form at another backend
//! SIGNUP_PORT=8080 SIGNUP_BACKEND_URL=http://lender:4000/api/signup cargo run --bin easyapply-web
//! ```
//!
//! # Environment Variables
//!
//! * `SIGNUP_HOST` - Server host (default: 0.0.0.0)
//! * `SIGNUP_PORT` - Server port (default: 3000)
//! * `SIGNUP_BACKEND_URL` - Where validated applications are POSTed
//!   (default: http://localhost:4000/api/signup)
//! * `SIGNUP_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use domain_signup::{HttpBackendConfig, HttpSignupBackend};
use interface_web::{config::WebConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the web server.
///
/// Initializes logging, loads configuration, builds the backend client,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = WebConfig::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend_url = %config.backend_url,
        "Starting EasyApply web server"
    );

    let backend = HttpSignupBackend::new(HttpBackendConfig {
        endpoint: config.backend_url.clone(),
    });

    let app = create_router(Arc::new(backend));

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests, including pending backend calls, complete before the
/// process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
