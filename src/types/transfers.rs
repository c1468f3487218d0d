use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bank {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NameEnquiryRequest {
    pub bank_code: String,
    pub account_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NameEnquiryResponse {
    pub account_name: String,
    pub account_number: String,
    pub bank_code: String,
    /// Must be echoed back in the [`TransferRequest`] that follows.
    pub name_enquiry_reference: String,
}

/// Payout to a bank account, used by both transfer endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub payment_reference: String,
    pub sender_account_number: String,
    pub sender_account_name: String,
    pub recipient_account_number: String,
    pub recipient_account_name: String,
    pub recipient_bank_code: String,
    /// Decimal string, e.g. `"1500.00"`.
    pub amount: String,
    pub name_enquiry_reference: String,
    pub narration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferResponse {
    pub id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransferStatus {
    Success,
    Failed,
    Processing,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusQueryResponse {
    pub id: String,
    pub payment_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub amount: Decimal,
    pub status: TransferStatus,
    pub transfer_date: String,
}
