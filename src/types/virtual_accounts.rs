use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::envelope::ResponseStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VirtualAccountStatus {
    Active,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VirtualAccountType {
    Permanent,
    Transient,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccount {
    pub account_number: String,
    pub account_name: String,
    pub business_id: String,
    pub status: VirtualAccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<VirtualAccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_payout_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_reference: Option<String>,
    /// Expected amount for transient accounts; `null` when any amount is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_single_payment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePermanentVirtualAccountRequest {
    pub request_reference: String,
    pub account_name: String,
    pub auto_payout_enabled: bool,
}

/// Returned when either kind of virtual account is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedVirtualAccount {
    pub request_reference: String,
    pub id: String,
    pub account_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePermanentVirtualAccountRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_payout_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClosePermanentVirtualAccountRequest {
    pub request_reference: String,
    pub account_number: String,
    pub reason_for_closure: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransientVirtualAccountRequest {
    pub request_reference: String,
    pub time_to_live: String,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_single_payment: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransientVirtualAccountRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_status: Option<bool>,
}

/// Listing of every virtual account, with per-kind totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllVirtualAccountsResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<VirtualAccount>>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub total_permanent_account_count: u64,
    #[serde(default)]
    pub total_transient_account_count: u64,
}
