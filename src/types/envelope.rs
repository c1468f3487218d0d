use serde::{Deserialize, Serialize};

use crate::error::ProviderStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Processing,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Envelope wrapping every 9jaPay response.
///
/// A `FAILED` status inside a 2xx response is returned as-is; inspect
/// `status` / `status_code` before trusting `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = serde_json::Value> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn provider_status(&self) -> ProviderStatus {
        ProviderStatus::from_code(&self.status_code)
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn provider_status(&self) -> ProviderStatus {
        ProviderStatus::from_code(&self.status_code)
    }

    /// Items on this page, empty when the envelope carried no data.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// `page-size` / `page-number` query pair shared by all list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationQuery {
    #[serde(rename = "page-size")]
    pub page_size: u32,
    #[serde(rename = "page-number")]
    pub page_number: u32,
}

impl PaginationQuery {
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self::new(20, 1)
    }
}
