//! Async client for the 9jaPay API: virtual accounts, balances, transfers and
//! transactions.
//!
//! ```no_run
//! use ninejapay::{Environment, NineJaPayClient, NineJaPayConfig, PaginationQuery};
//!
//! # async fn run() -> ninejapay::NineJaPayResult<()> {
//! let client = NineJaPayClient::new(NineJaPayConfig::new("api-key", "secret", Environment::Sandbox))?;
//! let page = client.get_all_virtual_accounts(&PaginationQuery::new(20, 1)).await?;
//! println!("{} accounts", page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod logging;
pub mod types;

pub use client::NineJaPayClient;
pub use config::{ConfigError, Environment, NineJaPayConfig};
pub use credentials::{CredentialSource, Credentials, StaticCredentials};
pub use error::{NineJaPayError, NineJaPayResult, ProviderStatus};
pub use types::*;
