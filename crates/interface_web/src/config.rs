//! Web server configuration

use domain_signup::DEFAULT_SIGNUP_ENDPOINT;
use serde::Deserialize;

/// Prefix of the environment variables read by [`WebConfig::from_env`]
pub const ENV_PREFIX: &str = "SIGNUP";

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// URL validated applications are POSTed to
    pub backend_url: String,
    /// Log level
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            backend_url: DEFAULT_SIGNUP_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from `SIGNUP_*` environment variables over defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source over defaults
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("backend_url", defaults.backend_url)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
