use reqwest::Method;

use super::NineJaPayClient;
use crate::error::NineJaPayResult;
use crate::types::{AccountBalance, ApiResponse, TotalBalanceSummary};

impl NineJaPayClient {
    /// Combined balance across permanent and transient accounts.
    pub async fn get_total_balance_summary(
        &self,
    ) -> NineJaPayResult<ApiResponse<TotalBalanceSummary>> {
        self.http
            .execute(
                self.http
                    .request(Method::GET, "/virtual-accounts/total-balance"),
            )
            .await
    }

    pub async fn get_account_balance(
        &self,
        account_number: &str,
    ) -> NineJaPayResult<ApiResponse<AccountBalance>> {
        let builder =
            self.http
                .request_with_id(Method::GET, "/virtual-accounts/balance", account_number)?;
        self.http.execute(builder).await
    }
}
