use reqwest::Method;
use tracing::info;

use super::NineJaPayClient;
use crate::error::NineJaPayResult;
use crate::logging::mask_account_number;
use crate::types::{
    ApiResponse, Bank, NameEnquiryRequest, NameEnquiryResponse, TransactionStatusQueryResponse,
    TransferRequest, TransferResponse,
};

impl NineJaPayClient {
    pub async fn get_bank_list(&self) -> NineJaPayResult<ApiResponse<Vec<Bank>>> {
        self.http
            .execute(self.http.request(Method::GET, "/banks"))
            .await
    }

    /// Resolve the account name behind a bank code / account number pair.
    ///
    /// The returned `name_enquiry_reference` is required by the transfer endpoints.
    pub async fn name_enquiry(
        &self,
        request: &NameEnquiryRequest,
    ) -> NineJaPayResult<ApiResponse<NameEnquiryResponse>> {
        self.http
            .execute(
                self.http
                    .request(Method::POST, "/transfers/name-enquiry")
                    .json(request),
            )
            .await
    }

    pub async fn transfer(
        &self,
        request: &TransferRequest,
    ) -> NineJaPayResult<ApiResponse<TransferResponse>> {
        self.send_transfer("/transfers", request).await
    }

    /// Same as [`Self::transfer`], debiting a virtual account instead of the main balance.
    pub async fn transfer_from_virtual_account(
        &self,
        request: &TransferRequest,
    ) -> NineJaPayResult<ApiResponse<TransferResponse>> {
        self.send_transfer("/transfers/virtual-account", request)
            .await
    }

    /// Transaction status query for a transfer's payment reference.
    pub async fn get_transaction_status(
        &self,
        reference: &str,
    ) -> NineJaPayResult<ApiResponse<TransactionStatusQueryResponse>> {
        let builder = self
            .http
            .request_with_id(Method::GET, "/transfers/tsq", reference)?;
        self.http.execute(builder).await
    }

    async fn send_transfer(
        &self,
        path: &str,
        request: &TransferRequest,
    ) -> NineJaPayResult<ApiResponse<TransferResponse>> {
        let response: ApiResponse<TransferResponse> = self
            .http
            .execute(self.http.request(Method::POST, path).json(request))
            .await?;
        info!(
            payment_reference = %request.payment_reference,
            recipient = %mask_account_number(&request.recipient_account_number),
            amount = %request.amount,
            status_code = %response.status_code,
            "9jaPay transfer submitted"
        );
        Ok(response)
    }
}
