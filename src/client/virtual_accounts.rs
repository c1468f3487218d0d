use reqwest::Method;
use tracing::info;

use super::NineJaPayClient;
use crate::error::NineJaPayResult;
use crate::logging::mask_account_number;
use crate::types::{
    AllVirtualAccountsResponse, ApiResponse, ClosePermanentVirtualAccountRequest,
    CreatePermanentVirtualAccountRequest, CreateTransientVirtualAccountRequest,
    CreatedVirtualAccount, PaginatedResponse, PaginationQuery,
    UpdatePermanentVirtualAccountRequest, UpdateTransientVirtualAccountRequest, VirtualAccount,
};

const PERMANENT: &str = "/virtual-accounts/permanent";
const TRANSIENT: &str = "/virtual-accounts/transient";
const ALL: &str = "/virtual-accounts";

impl NineJaPayClient {
    pub async fn create_permanent_virtual_account(
        &self,
        request: &CreatePermanentVirtualAccountRequest,
    ) -> NineJaPayResult<ApiResponse<CreatedVirtualAccount>> {
        let response: ApiResponse<CreatedVirtualAccount> = self
            .http
            .execute(self.http.request(Method::POST, PERMANENT).json(request))
            .await?;
        if let Some(created) = &response.data {
            info!(
                request_reference = %created.request_reference,
                account = %mask_account_number(&created.account_number),
                "permanent virtual account created"
            );
        }
        Ok(response)
    }

    /// Partial update; only the fields set on `request` are sent.
    pub async fn update_permanent_virtual_account(
        &self,
        account_number: &str,
        request: &UpdatePermanentVirtualAccountRequest,
    ) -> NineJaPayResult<ApiResponse<VirtualAccount>> {
        let builder = self
            .http
            .request_with_id(Method::PATCH, PERMANENT, account_number)?
            .json(request);
        self.http.execute(builder).await
    }

    pub async fn get_permanent_virtual_account(
        &self,
        account_number: &str,
    ) -> NineJaPayResult<ApiResponse<VirtualAccount>> {
        let builder = self
            .http
            .request_with_id(Method::GET, PERMANENT, account_number)?;
        self.http.execute(builder).await
    }

    pub async fn get_all_permanent_virtual_accounts(
        &self,
        query: &PaginationQuery,
    ) -> NineJaPayResult<PaginatedResponse<VirtualAccount>> {
        self.http
            .execute(self.http.request(Method::GET, PERMANENT).query(query))
            .await
    }

    /// Close a permanent account. 9jaPay expects the details as a DELETE body.
    pub async fn close_permanent_virtual_account(
        &self,
        request: &ClosePermanentVirtualAccountRequest,
    ) -> NineJaPayResult<ApiResponse> {
        let response: ApiResponse = self
            .http
            .execute(self.http.request(Method::DELETE, PERMANENT).json(request))
            .await?;
        info!(
            account = %mask_account_number(&request.account_number),
            status_code = %response.status_code,
            "permanent virtual account close requested"
        );
        Ok(response)
    }

    pub async fn create_transient_virtual_account(
        &self,
        request: &CreateTransientVirtualAccountRequest,
    ) -> NineJaPayResult<ApiResponse<CreatedVirtualAccount>> {
        self.http
            .execute(self.http.request(Method::POST, TRANSIENT).json(request))
            .await
    }

    pub async fn update_transient_virtual_account(
        &self,
        account_number: &str,
        request: &UpdateTransientVirtualAccountRequest,
    ) -> NineJaPayResult<ApiResponse<VirtualAccount>> {
        let builder = self
            .http
            .request_with_id(Method::PUT, TRANSIENT, account_number)?
            .json(request);
        self.http.execute(builder).await
    }

    pub async fn get_transient_virtual_account(
        &self,
        account_number: &str,
    ) -> NineJaPayResult<ApiResponse<VirtualAccount>> {
        let builder = self
            .http
            .request_with_id(Method::GET, TRANSIENT, account_number)?;
        self.http.execute(builder).await
    }

    pub async fn get_all_transient_virtual_accounts(
        &self,
        query: &PaginationQuery,
    ) -> NineJaPayResult<PaginatedResponse<VirtualAccount>> {
        self.http
            .execute(self.http.request(Method::GET, TRANSIENT).query(query))
            .await
    }

    /// Every virtual account regardless of kind, with per-kind totals.
    pub async fn get_all_virtual_accounts(
        &self,
        query: &PaginationQuery,
    ) -> NineJaPayResult<AllVirtualAccountsResponse> {
        self.http
            .execute(self.http.request(Method::GET, ALL).query(query))
            .await
    }

    /// Look up an account of either kind.
    pub async fn get_virtual_account(
        &self,
        account_number: &str,
    ) -> NineJaPayResult<ApiResponse<VirtualAccount>> {
        let builder = self.http.request_with_id(Method::GET, ALL, account_number)?;
        self.http.execute(builder).await
    }
}
