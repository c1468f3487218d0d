use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub account_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TotalBalanceSummary {
    pub total_permanent_account_balance: Decimal,
    pub total_transient_account_balance: Decimal,
    pub total_virtual_account_balance: Decimal,
}
