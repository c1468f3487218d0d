//! HTTP transport shared by every endpoint method.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::NineJaPayConfig;
use crate::credentials::{CredentialSource, API_KEY_HEADER, SECRET_HEADER};
use crate::error::{NineJaPayError, NineJaPayResult};

/// The single long-lived HTTP client every operation goes through.
///
/// Holds no mutable state, so clones can issue requests concurrently.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialSource>,
}

impl HttpTransport {
    pub fn new(
        config: &NineJaPayConfig,
        credentials: Arc<dyn CredentialSource>,
    ) -> NineJaPayResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("ninejapay-rust/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(!config.tls_verify);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if !config.tls_verify {
            warn!("TLS certificate verification is disabled");
        }

        let client = builder.build().map_err(|e| {
            NineJaPayError::configuration(format!("failed to initialize HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request against `path`, which is relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Like [`Self::request`], with `id` appended as one percent-encoded path segment.
    pub fn request_with_id(
        &self,
        method: Method,
        path: &str,
        id: &str,
    ) -> NineJaPayResult<RequestBuilder> {
        let mut url = reqwest::Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| NineJaPayError::configuration(format!("invalid request url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| NineJaPayError::configuration("base url cannot carry path segments"))?
            .push(id);
        Ok(self.client.request(method, url))
    }

    /// Attach credentials, send, and decode the body of a success response.
    ///
    /// Every failure is converted to a [`NineJaPayError`].
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> NineJaPayResult<T> {
        let credentials = self.credentials.credentials().await?;
        let mut secret = HeaderValue::from_str(&credentials.secret_key)
            .map_err(|_| NineJaPayError::configuration("secret key is not a valid header value"))?;
        secret.set_sensitive(true);
        let api_key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|_| NineJaPayError::configuration("api key is not a valid header value"))?;

        let request = request
            .header(API_KEY_HEADER, api_key)
            .header(SECRET_HEADER, secret)
            .build()?;

        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(method = %method, path = %path, "sending 9jaPay request");

        let response = self.client.execute(request).await.map_err(|e| {
            error!(method = %method, path = %path, error = %e, "9jaPay request failed");
            NineJaPayError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let err = NineJaPayError::from_failed_response(status, &body);
            warn!(
                method = %method,
                path = %path,
                http_status = status.as_u16(),
                provider_code = err.provider_code().unwrap_or("-"),
                message = err.message(),
                "9jaPay rejected request"
            );
            return Err(err);
        }

        serde_json::from_slice::<T>(&body).map_err(|e| NineJaPayError::InvalidResponse {
            message: e.to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
