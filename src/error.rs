//! Error type shared by every client operation.
//!
//! All failures surface as a single [`NineJaPayError`] so callers can branch
//! on the variant (and on the 9jaPay status code it carries) instead of
//! parsing messages.

use reqwest::StatusCode;
use serde_json::Value as JsonValue;
use thiserror::Error;

pub type NineJaPayResult<T> = Result<T, NineJaPayError>;

/// Outcome codes returned by 9jaPay in the `statusCode` field of every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderStatus {
    /// `00`
    Success,
    /// `01`
    Processing,
    /// `06`
    GeneralError,
    /// `09`
    ValidationError,
    /// `25`
    NotFound,
    /// `26`
    Duplicate,
    Unknown(String),
}

impl ProviderStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "00" => ProviderStatus::Success,
            "01" => ProviderStatus::Processing,
            "06" => ProviderStatus::GeneralError,
            "09" => ProviderStatus::ValidationError,
            "25" => ProviderStatus::NotFound,
            "26" => ProviderStatus::Duplicate,
            other => ProviderStatus::Unknown(other.to_string()),
        }
    }

    /// Canonical two-digit code. Unknown codes keep their trimmed text.
    pub fn code(&self) -> &str {
        match self {
            ProviderStatus::Success => "00",
            ProviderStatus::Processing => "01",
            ProviderStatus::GeneralError => "06",
            ProviderStatus::ValidationError => "09",
            ProviderStatus::NotFound => "25",
            ProviderStatus::Duplicate => "26",
            ProviderStatus::Unknown(code) => code,
        }
    }

    /// HTTP status equivalent. Unlisted codes are treated as server errors.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ProviderStatus::Success => StatusCode::OK,
            ProviderStatus::Processing => StatusCode::ACCEPTED,
            ProviderStatus::GeneralError => StatusCode::INTERNAL_SERVER_ERROR,
            ProviderStatus::ValidationError => StatusCode::BAD_REQUEST,
            ProviderStatus::NotFound => StatusCode::NOT_FOUND,
            ProviderStatus::Duplicate => StatusCode::CONFLICT,
            ProviderStatus::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Error)]
pub enum NineJaPayError {
    /// The request never produced a response (connect, TLS, DNS, timeout).
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// 9jaPay answered with a non-success HTTP status.
    #[error("9jaPay error{}: {message}", code_suffix(.provider_status))]
    Api {
        http_status: StatusCode,
        provider_status: Option<ProviderStatus>,
        message: String,
        /// Body as sent. A JSON string holds bodies that were not JSON.
        response: JsonValue,
    },

    /// A success response whose body could not be decoded into the expected shape.
    #[error("Invalid response from 9jaPay: {message}")]
    InvalidResponse { message: String, body: String },

    /// Local precondition failure, raised before any network activity.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn code_suffix(status: &Option<ProviderStatus>) -> String {
    status
        .as_ref()
        .map(|s| format!(" {}", s))
        .unwrap_or_default()
}

impl NineJaPayError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Builds the uniform error for a non-success response.
    ///
    /// `message` and `statusCode` are taken from the body when it is a JSON
    /// object carrying them; otherwise the transport-level message is used.
    pub fn from_failed_response(http_status: StatusCode, body: &[u8]) -> Self {
        let response = serde_json::from_slice::<JsonValue>(body)
            .unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(body).into_owned()));

        let message = response
            .get("message")
            .and_then(|v| v.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", http_status.as_u16()));

        let provider_status = response
            .get("statusCode")
            .and_then(|v| v.as_str())
            .map(ProviderStatus::from_code);

        Self::Api {
            http_status,
            provider_status,
            message,
            response,
        }
    }

    /// The 9jaPay status code, when the remote service supplied one.
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            NineJaPayError::Api {
                provider_status: Some(status),
                ..
            } => Some(status.code()),
            _ => None,
        }
    }

    pub fn provider_status(&self) -> Option<&ProviderStatus> {
        match self {
            NineJaPayError::Api {
                provider_status, ..
            } => provider_status.as_ref(),
            _ => None,
        }
    }

    /// HTTP-style category for this failure.
    ///
    /// Provider codes win over the HTTP status actually received.
    pub fn http_status(&self) -> StatusCode {
        match self {
            NineJaPayError::Transport { .. } => StatusCode::SERVICE_UNAVAILABLE,
            NineJaPayError::Api {
                http_status,
                provider_status,
                ..
            } => provider_status
                .as_ref()
                .map(ProviderStatus::http_status)
                .unwrap_or(*http_status),
            NineJaPayError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
            NineJaPayError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            NineJaPayError::Transport { message }
            | NineJaPayError::Api { message, .. }
            | NineJaPayError::InvalidResponse { message, .. }
            | NineJaPayError::Configuration { message } => message,
        }
    }

    /// Raw response body of a rejected request. Non-JSON bodies come back as a JSON string.
    pub fn raw_response(&self) -> Option<&JsonValue> {
        match self {
            NineJaPayError::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NineJaPayError {
    fn from(err: reqwest::Error) -> Self {
        NineJaPayError::Transport {
            message: err.to_string(),
        }
    }
}
