use reqwest::Method;
use tracing::info;

use super::NineJaPayClient;
use crate::error::NineJaPayResult;
use crate::logging::mask_account_number;
use crate::types::{
    ApiResponse, PaginatedResponse, ResendNotificationRequest,
    ResendNotificationsForAccountRequest, ResendNotificationsResponse, SimulateDepositRequest,
    Transaction, TransactionsQuery,
};

impl NineJaPayClient {
    /// Page through transactions. Optional filters on `query` are sent only when set.
    pub async fn get_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> NineJaPayResult<PaginatedResponse<Transaction>> {
        self.http
            .execute(self.http.request(Method::GET, "/transactions").query(query))
            .await
    }

    pub async fn get_transaction_by_id(
        &self,
        transaction_id: &str,
    ) -> NineJaPayResult<ApiResponse<Transaction>> {
        let builder = self
            .http
            .request_with_id(Method::GET, "/transactions", transaction_id)?;
        self.http.execute(builder).await
    }

    pub async fn resend_notification(
        &self,
        request: &ResendNotificationRequest,
    ) -> NineJaPayResult<ApiResponse> {
        self.http
            .execute(
                self.http
                    .request(Method::POST, "/transactions/resend-notification")
                    .json(request),
            )
            .await
    }

    pub async fn resend_notifications_for_account(
        &self,
        request: &ResendNotificationsForAccountRequest,
    ) -> NineJaPayResult<ApiResponse<ResendNotificationsResponse>> {
        self.http
            .execute(
                self.http
                    .request(Method::POST, "/transactions/resend-notifications-for-account")
                    .json(request),
            )
            .await
    }

    pub async fn resend_all_notifications(
        &self,
    ) -> NineJaPayResult<ApiResponse<ResendNotificationsResponse>> {
        self.http
            .execute(
                self.http
                    .request(Method::POST, "/transactions/resend-all-notifications"),
            )
            .await
    }

    /// Credit a virtual account with test funds.
    ///
    /// Fails with a configuration error outside the sandbox, before any request is made.
    pub async fn simulate_deposit(
        &self,
        request: &SimulateDepositRequest,
    ) -> NineJaPayResult<ApiResponse> {
        self.ensure_sandbox("simulate deposit")?;

        let response: ApiResponse = self
            .http
            .execute(
                self.http
                    .request(Method::POST, "/transactions/simulate-deposit")
                    .json(request),
            )
            .await?;
        info!(
            account = %mask_account_number(&request.recipient_account_number),
            amount = %request.amount,
            "sandbox deposit simulated"
        );
        Ok(response)
    }
}
