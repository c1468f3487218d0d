//! Credential supply for outgoing requests.
//!
//! 9jaPay authenticates with two static headers. The transport asks a
//! [`CredentialSource`] for them on every request, so hosts that rotate keys
//! can plug in their own source instead of rebuilding the client.

use async_trait::async_trait;

use crate::config::NineJaPayConfig;
use crate::error::NineJaPayResult;

pub const API_KEY_HEADER: &str = "api-key";
pub const SECRET_HEADER: &str = "secret";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &crate::logging::mask_secret(&self.api_key))
            .field("secret_key", &"***")
            .finish()
    }
}

#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn credentials(&self) -> NineJaPayResult<Credentials>;
}

/// Credentials fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl From<&NineJaPayConfig> for StaticCredentials {
    fn from(config: &NineJaPayConfig) -> Self {
        Self::new(Credentials::new(
            config.api_key.clone(),
            config.secret_key.clone(),
        ))
    }
}

#[async_trait]
impl CredentialSource for StaticCredentials {
    async fn credentials(&self) -> NineJaPayResult<Credentials> {
        Ok(self.credentials.clone())
    }
}
