use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionType {
    Credit,
    Debit,
    #[serde(other)]
    Unknown,
}

/// Delivery state of the webhook notification for a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecipient {
    pub account_name: String,
    pub bank: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetadata {
    pub sender_account_name: String,
    pub sender_account_number: String,
    pub sender_bank: String,
    pub sender_bank_code: String,
    #[serde(default)]
    pub recipients: Vec<TransactionRecipient>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub transaction_reference: String,
    pub account_number: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub narration: String,
    pub transaction_date: String,
    pub notification_status: NotificationStatus,
    pub metadata: TransactionMetadata,
}

/// Filters for the transaction listing. Unset optional filters are left out
/// of the query string entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionsQuery {
    #[serde(rename = "page-size")]
    pub page_size: u32,
    #[serde(rename = "page-number")]
    pub page_number: u32,
    #[serde(rename = "account-number", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(rename = "start-date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "end-date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl TransactionsQuery {
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
            ..Default::default()
        }
    }

    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendNotificationRequest {
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendNotificationsForAccountRequest {
    pub account_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendNotificationsResponse {
    pub number_of_resent_notifications: u64,
}

/// Sandbox-only credit to a virtual account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimulateDepositRequest {
    pub recipient_account_number: String,
    pub amount: String,
    pub auth_key: String,
}
