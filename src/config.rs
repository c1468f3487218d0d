//! Client configuration
//! Handles environment variable loading, validation and base URL resolution

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::NineJaPayError;

pub const SANDBOX_BASE_URL: &str = "https://test.developer.9japay.com/v1/api";
pub const PRODUCTION_BASE_URL: &str = "https://developer.9japay.com/v1/api";

/// 9jaPay deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue(format!(
                "unsupported environment: {}",
                value
            ))),
        }
    }
}

/// Settings for a [`crate::NineJaPayClient`]. Immutable once the client is built.
#[derive(Clone)]
pub struct NineJaPayConfig {
    pub api_key: String,
    pub secret_key: String,
    pub environment: Environment,
    pub base_url_override: Option<String>,
    /// Verify the server TLS certificate. Only disable for local testing.
    pub tls_verify: bool,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for NineJaPayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NineJaPayConfig")
            .field("api_key", &"***")
            .field("secret_key", &"***")
            .field("environment", &self.environment)
            .field("base_url_override", &self.base_url_override)
            .field("tls_verify", &self.tls_verify)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NineJaPayConfig {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            environment,
            base_url_override: None,
            tls_verify: true,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn with_tls_verify(mut self, tls_verify: bool) -> Self {
        self.tls_verify = tls_verify;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `.env` if present. `NINEJAPAY_ENVIRONMENT` defaults to sandbox when
    /// unset, but an unrecognized value is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv().ok();

        let api_key = env::var("NINEJAPAY_API_KEY")
            .map_err(|_| ConfigError::MissingVariable("NINEJAPAY_API_KEY".to_string()))?;
        let secret_key = env::var("NINEJAPAY_SECRET_KEY")
            .map_err(|_| ConfigError::MissingVariable("NINEJAPAY_SECRET_KEY".to_string()))?;

        let environment = match env::var("NINEJAPAY_ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Sandbox,
        };

        let tls_verify = env::var("NINEJAPAY_TLS_VERIFY")
            .unwrap_or_else(|_| "true".to_string())
            .trim()
            .to_lowercase()
            .parse::<bool>()
            .map_err(|_| ConfigError::InvalidValue("NINEJAPAY_TLS_VERIFY".to_string()))?;

        let timeout = match env::var("NINEJAPAY_TIMEOUT_SECS") {
            Ok(value) => Some(Duration::from_secs(value.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("NINEJAPAY_TIMEOUT_SECS".to_string())
            })?)),
            Err(_) => None,
        };

        let config = NineJaPayConfig {
            api_key,
            secret_key,
            environment,
            base_url_override: env::var("NINEJAPAY_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            tls_verify,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Full check: credentials plus [`Self::validate_connection`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_credentials()?;
        self.validate_connection()
    }

    pub fn validate_credentials(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "api key cannot be empty".to_string(),
            ));
        }

        if self.secret_key.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "secret key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Checks the transport settings only. Keys are left to the credential source.
    pub fn validate_connection(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base_url_override {
            let parsed = reqwest::Url::parse(base_url).map_err(|e| {
                ConfigError::InvalidValue(format!("base url {}: {}", base_url, e))
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::InvalidValue(
                    "base url must use http:// or https://".to_string(),
                ));
            }
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The override when present, otherwise the fixed URL for the environment.
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.environment.default_base_url())
    }

    pub fn is_sandbox(&self) -> bool {
        self.environment == Environment::Sandbox
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),

    #[error("Invalid value for configuration: {0}")]
    InvalidValue(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl From<ConfigError> for NineJaPayError {
    fn from(err: ConfigError) -> Self {
        NineJaPayError::configuration(err.to_string())
    }
}
