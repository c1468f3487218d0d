//! The 9jaPay client. One async method per API endpoint, grouped by resource:
//!
//! - [`virtual_accounts`]: permanent and transient virtual account lifecycle
//! - [`balances`]: per-account and aggregate balances
//! - [`transfers`]: bank list, name enquiry, payouts and transfer status
//! - [`transactions`]: transaction history, notifications, sandbox deposits
//!
//! Methods do no validation of their own; the remote service validates and
//! its rejections come back as [`NineJaPayError::Api`].

mod balances;
mod transactions;
mod transfers;
mod virtual_accounts;

use std::sync::Arc;

use tracing::info;

use crate::config::{Environment, NineJaPayConfig};
use crate::credentials::{CredentialSource, StaticCredentials};
use crate::error::{NineJaPayError, NineJaPayResult};
use crate::http::HttpTransport;

#[derive(Debug, Clone)]
pub struct NineJaPayClient {
    http: HttpTransport,
    environment: Environment,
}

impl NineJaPayClient {
    /// Build a client that sends the api key and secret from `config`.
    pub fn new(config: NineJaPayConfig) -> NineJaPayResult<Self> {
        config.validate_credentials()?;
        let credentials = Arc::new(StaticCredentials::from(&config));
        Self::with_credentials(config, credentials)
    }

    /// Build a client whose headers come from a caller-supplied source.
    ///
    /// The api key and secret in `config` are ignored and may be empty.
    pub fn with_credentials(
        config: NineJaPayConfig,
        credentials: Arc<dyn CredentialSource>,
    ) -> NineJaPayResult<Self> {
        config.validate_connection()?;
        let http = HttpTransport::new(&config, credentials)?;

        info!(
            environment = %config.environment,
            base_url = %http.base_url(),
            "9jaPay client initialized"
        );

        Ok(Self {
            http,
            environment: config.environment,
        })
    }

    /// Build a client from `NINEJAPAY_*` environment variables.
    pub fn from_env() -> NineJaPayResult<Self> {
        Self::new(NineJaPayConfig::from_env()?)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    fn ensure_sandbox(&self, operation: &str) -> NineJaPayResult<()> {
        if self.environment != Environment::Sandbox {
            return Err(NineJaPayError::configuration(format!(
                "{} is only available in the sandbox environment",
                operation
            )));
        }
        Ok(())
    }
}
