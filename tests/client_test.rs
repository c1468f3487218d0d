use std::sync::Arc;

use async_trait::async_trait;
use ninejapay::{
    AccountBalance, ClosePermanentVirtualAccountRequest, CreatePermanentVirtualAccountRequest,
    CreateTransientVirtualAccountRequest, CreatedVirtualAccount, CredentialSource, Credentials,
    Environment, NameEnquiryRequest, NineJaPayClient, NineJaPayConfig, NineJaPayError,
    NineJaPayResult, PaginationQuery, ProviderStatus, ResendNotificationsForAccountRequest,
    ResponseStatus, SimulateDepositRequest, TransactionType, TransactionsQuery, TransferRequest,
    TransferStatus, UpdatePermanentVirtualAccountRequest, UpdateTransientVirtualAccountRequest,
    VirtualAccountStatus, VirtualAccountType,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{
    body_json, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, environment: Environment) -> NineJaPayClient {
    NineJaPayClient::new(
        NineJaPayConfig::new("test-api-key", "test-secret", environment).with_base_url(server.uri()),
    )
    .expect("client init should succeed")
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({
        "status": "SUCCESS",
        "message": "ok",
        "statusCode": "00",
        "data": data
    })
}

fn transfer_request() -> TransferRequest {
    TransferRequest {
        payment_reference: "pay-001".to_string(),
        sender_account_number: "9900000001".to_string(),
        sender_account_name: "Acme Ltd".to_string(),
        recipient_account_number: "0123456789".to_string(),
        recipient_account_name: "Ada Obi".to_string(),
        recipient_bank_code: "058".to_string(),
        amount: "1500.00".to_string(),
        name_enquiry_reference: "ne-123".to_string(),
        narration: "October payout".to_string(),
    }
}

#[tokio::test]
async fn every_request_carries_credential_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banks"))
        .and(header("api-key", "test-api-key"))
        .and(header("secret", "test-secret"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "name": "GTBank", "code": "058" },
            { "name": "Access Bank", "code": "044" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let banks = client_for(&server, Environment::Sandbox)
        .get_bank_list()
        .await
        .expect("bank list should succeed");

    let banks = banks.data.expect("banks present");
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].code, "058");
}

#[tokio::test]
async fn create_permanent_account_round_trips_payload() {
    let server = MockServer::start().await;
    let request = CreatePermanentVirtualAccountRequest {
        request_reference: "req-42".to_string(),
        account_name: "Acme Collections".to_string(),
        auto_payout_enabled: false,
    };
    let created = json!({
        "requestReference": "req-42",
        "id": "va_1",
        "accountNumber": "9901234567"
    });

    Mock::given(method("POST"))
        .and(path("/virtual-accounts/permanent"))
        .and(body_json(json!({
            "requestReference": "req-42",
            "accountName": "Acme Collections",
            "autoPayoutEnabled": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(created)))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .create_permanent_virtual_account(&request)
        .await
        .expect("create should succeed");

    assert_eq!(response.status, ResponseStatus::Success);
    assert_eq!(response.provider_status(), ProviderStatus::Success);
    assert_eq!(
        response.data,
        Some(CreatedVirtualAccount {
            request_reference: "req-42".to_string(),
            id: "va_1".to_string(),
            account_number: "9901234567".to_string(),
        })
    );
}

#[tokio::test]
async fn update_permanent_account_patches_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/virtual-accounts/permanent/9901234567"))
        .and(body_json(json!({ "accountName": "Renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "accountNumber": "9901234567",
            "accountName": "Renamed",
            "businessId": "biz_1",
            "status": "Active"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .update_permanent_virtual_account(
            "9901234567",
            &UpdatePermanentVirtualAccountRequest {
                account_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed");

    let account = response.data.expect("account present");
    assert_eq!(account.account_name, "Renamed");
    assert_eq!(account.status, VirtualAccountStatus::Active);
}

fn account_json(account_number: &str, account_type: &str) -> serde_json::Value {
    json!({
        "accountNumber": account_number,
        "accountName": "Main",
        "businessId": "biz_1",
        "status": "Active",
        "accountType": account_type
    })
}

#[tokio::test]
async fn get_permanent_account_by_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/permanent/9901234567"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(account_json("9901234567", "Permanent"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let account = client_for(&server, Environment::Sandbox)
        .get_permanent_virtual_account("9901234567")
        .await
        .expect("lookup should succeed")
        .data
        .expect("account present");

    assert_eq!(account.account_type, Some(VirtualAccountType::Permanent));
}

#[tokio::test]
async fn permanent_listing_uses_permanent_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/permanent"))
        .and(query_param("page-size", "50"))
        .and(query_param("page-number", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "ok",
            "statusCode": "00",
            "data": [account_json("9901234567", "Permanent")],
            "totalCount": 101
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server, Environment::Sandbox)
        .get_all_permanent_virtual_accounts(&PaginationQuery::new(50, 3))
        .await
        .expect("listing should succeed");

    assert_eq!(page.total_count, 101);
    assert_eq!(page.items().len(), 1);
}

#[tokio::test]
async fn update_transient_account_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/virtual-accounts/transient/9907654321"))
        .and(body_json(json!({ "blockStatus": true })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(account_json("9907654321", "Transient"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .update_transient_virtual_account(
            "9907654321",
            &UpdateTransientVirtualAccountRequest {
                block_status: Some(true),
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(
        response.data.and_then(|a| a.account_type),
        Some(VirtualAccountType::Transient)
    );
}

#[tokio::test]
async fn get_transient_account_by_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/transient/9907654321"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(account_json("9907654321", "Transient"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let account = client_for(&server, Environment::Sandbox)
        .get_transient_virtual_account("9907654321")
        .await
        .expect("lookup should succeed")
        .data
        .expect("account present");

    assert_eq!(account.account_number, "9907654321");
}

#[tokio::test]
async fn close_permanent_account_sends_delete_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/virtual-accounts/permanent"))
        .and(body_json(json!({
            "requestReference": "close-1",
            "accountNumber": "9901234567",
            "reasonForClosure": "customer request"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "Account closed",
            "statusCode": "00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .close_permanent_virtual_account(&ClosePermanentVirtualAccountRequest {
            request_reference: "close-1".to_string(),
            account_number: "9901234567".to_string(),
            reason_for_closure: "customer request".to_string(),
        })
        .await
        .expect("close should succeed");

    assert_eq!(response.message, "Account closed");
    assert!(response.data.is_none());
}

#[tokio::test]
async fn create_transient_account_omits_unset_optionals() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/virtual-accounts/transient"))
        .and(body_json(json!({
            "requestReference": "tr-1",
            "timeToLive": "30m"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "requestReference": "tr-1",
            "id": "va_2",
            "accountNumber": "9907654321"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .create_transient_virtual_account(&CreateTransientVirtualAccountRequest {
            request_reference: "tr-1".to_string(),
            time_to_live: "30m".to_string(),
            amount: None,
            is_single_payment: None,
        })
        .await
        .expect("create should succeed");

    assert_eq!(response.data.expect("created").account_number, "9907654321");
}

#[tokio::test]
async fn listing_sends_hyphenated_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts"))
        .and(query_param("page-size", "20"))
        .and(query_param("page-number", "2"))
        .and(query_param_is_missing("pageSize"))
        .and(query_param_is_missing("pageNumber"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "ok",
            "statusCode": "00",
            "data": [{
                "accountNumber": "9901234567",
                "accountName": "Main",
                "businessId": "biz_1",
                "status": "Active",
                "accountType": "Permanent"
            }],
            "totalCount": 21,
            "totalPermanentAccountCount": 15,
            "totalTransientAccountCount": 6
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server, Environment::Sandbox)
        .get_all_virtual_accounts(&PaginationQuery::new(20, 2))
        .await
        .expect("listing should succeed");

    assert_eq!(page.total_count, 21);
    assert_eq!(page.total_permanent_account_count, 15);
    assert_eq!(page.total_transient_account_count, 6);
    assert_eq!(page.data.map(|d| d.len()), Some(1));
}

#[tokio::test]
async fn transient_listing_uses_transient_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/transient"))
        .and(query_param("page-size", "5"))
        .and(query_param("page-number", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "ok",
            "statusCode": "00",
            "data": [],
            "totalCount": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server, Environment::Sandbox)
        .get_all_transient_virtual_accounts(&PaginationQuery::new(5, 1))
        .await
        .expect("listing should succeed");

    assert!(page.items().is_empty());
}

#[tokio::test]
async fn account_balance_decodes_amount() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/balance/9901234567"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!({ "accountBalance": 1250.75 }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .get_account_balance("9901234567")
        .await
        .expect("balance should succeed");

    assert_eq!(
        response.data,
        Some(AccountBalance {
            account_balance: Decimal::new(125075, 2)
        })
    );
}

#[tokio::test]
async fn total_balance_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/total-balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "totalPermanentAccountBalance": 1000,
            "totalTransientAccountBalance": 250,
            "totalVirtualAccountBalance": 1250
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let summary = client_for(&server, Environment::Sandbox)
        .get_total_balance_summary()
        .await
        .expect("summary should succeed")
        .data
        .expect("summary present");

    assert_eq!(summary.total_virtual_account_balance, Decimal::new(1250, 0));
}

#[tokio::test]
async fn name_enquiry_then_transfer_from_virtual_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transfers/name-enquiry"))
        .and(body_json(json!({ "bankCode": "058", "accountNumber": "0123456789" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "accountName": "Ada Obi",
            "accountNumber": "0123456789",
            "bankCode": "058",
            "nameEnquiryReference": "ne-123"
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transfers/virtual-account"))
        .and(body_json(serde_json::to_value(transfer_request()).expect("serialize")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "id": "tr_9" }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Environment::Sandbox);
    let enquiry = client
        .name_enquiry(&NameEnquiryRequest {
            bank_code: "058".to_string(),
            account_number: "0123456789".to_string(),
        })
        .await
        .expect("enquiry should succeed")
        .data
        .expect("enquiry present");
    assert_eq!(enquiry.name_enquiry_reference, "ne-123");

    let transfer = client
        .transfer_from_virtual_account(&transfer_request())
        .await
        .expect("transfer should succeed");
    assert_eq!(transfer.data.map(|d| d.id), Some("tr_9".to_string()));
}

#[tokio::test]
async fn transfer_from_main_balance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transfers"))
        .and(body_json(serde_json::to_value(transfer_request()).expect("serialize")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "id": "tr_1" }))))
        .expect(1)
        .mount(&server)
        .await;

    let transfer = client_for(&server, Environment::Sandbox)
        .transfer(&transfer_request())
        .await
        .expect("transfer should succeed");

    assert_eq!(transfer.data.map(|d| d.id), Some("tr_1".to_string()));
}

#[tokio::test]
async fn transfer_status_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transfers/tsq/pay-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": "tr_9",
            "paymentReference": "pay-001",
            "sessionId": "000015261017",
            "amount": 1500,
            "status": "Success",
            "transferDate": "2026-10-17T09:30:00Z"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let tsq = client_for(&server, Environment::Sandbox)
        .get_transaction_status("pay-001")
        .await
        .expect("tsq should succeed")
        .data
        .expect("tsq present");

    assert_eq!(tsq.status, TransferStatus::Success);
    assert_eq!(tsq.session_id.as_deref(), Some("000015261017"));
}

#[tokio::test]
async fn transactions_without_filters_omit_optional_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("page-size", "20"))
        .and(query_param("page-number", "2"))
        .and(query_param_is_missing("account-number"))
        .and(query_param_is_missing("start-date"))
        .and(query_param_is_missing("end-date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "ok",
            "statusCode": "00",
            "data": [],
            "totalCount": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, Environment::Sandbox)
        .get_transactions(&TransactionsQuery::new(20, 2))
        .await
        .expect("listing should succeed");
}

#[tokio::test]
async fn transactions_include_exactly_the_filters_supplied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("page-size", "10"))
        .and(query_param("page-number", "1"))
        .and(query_param("account-number", "9901234567"))
        .and(query_param_is_missing("start-date"))
        .and(query_param("end-date", "2026-10-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "ok",
            "statusCode": "00",
            "data": [{
                "transactionId": "txn_1",
                "transactionReference": "ref_1",
                "accountNumber": "9901234567",
                "transactionType": "Debit",
                "amount": 300,
                "narration": "Payout",
                "transactionDate": "2026-10-17T08:00:00Z",
                "notificationStatus": "Success",
                "metadata": {
                    "senderAccountName": "Acme Ltd",
                    "senderAccountNumber": "9901234567",
                    "senderBank": "9jaPay",
                    "senderBankCode": "999",
                    "recipients": []
                }
            }],
            "totalCount": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server, Environment::Sandbox)
        .get_transactions(
            &TransactionsQuery::new(10, 1)
                .account_number("9901234567")
                .end_date("2026-10-31"),
        )
        .await
        .expect("listing should succeed");

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items()[0].transaction_type, TransactionType::Debit);
}

#[tokio::test]
async fn resend_notifications_for_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transactions/resend-notifications-for-account"))
        .and(body_json(json!({ "accountNumber": "9901234567" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "numberOfResentNotifications": 3
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transactions/resend-all-notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "numberOfResentNotifications": 11
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Environment::Sandbox);
    let for_account = client
        .resend_notifications_for_account(&ResendNotificationsForAccountRequest {
            account_number: "9901234567".to_string(),
        })
        .await
        .expect("resend should succeed");
    assert_eq!(
        for_account.data.map(|d| d.number_of_resent_notifications),
        Some(3)
    );

    let all = client
        .resend_all_notifications()
        .await
        .expect("resend all should succeed");
    assert_eq!(all.data.map(|d| d.number_of_resent_notifications), Some(11));
}

#[tokio::test]
async fn provider_rejection_becomes_uniform_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/virtual-accounts/permanent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "FAILED",
            "message": "duplicate",
            "statusCode": "26"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, Environment::Sandbox)
        .create_permanent_virtual_account(&CreatePermanentVirtualAccountRequest {
            request_reference: "req-42".to_string(),
            account_name: "Acme Collections".to_string(),
            auto_payout_enabled: true,
        })
        .await
        .expect_err("duplicate must fail");

    assert_eq!(err.provider_code(), Some("26"));
    assert_eq!(err.http_status(), StatusCode::CONFLICT);
    assert_eq!(err.message(), "duplicate");
    assert!(matches!(
        err,
        NineJaPayError::Api {
            http_status: StatusCode::BAD_REQUEST,
            ..
        }
    ));
}

#[tokio::test]
async fn not_found_without_json_body_falls_back_to_http_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, Environment::Sandbox)
        .get_transaction_by_id("missing")
        .await
        .expect_err("missing transaction must fail");

    assert_eq!(err.provider_code(), None);
    assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message(), "Request failed with status code 404");
    assert_eq!(
        err.raw_response().and_then(|v| v.as_str()),
        Some("Not Found")
    );
}

#[tokio::test]
async fn failed_envelope_with_http_200_is_returned_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transactions/resend-notification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "FAILED",
            "message": "No record found",
            "statusCode": "25"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .resend_notification(&ninejapay::ResendNotificationRequest {
            transaction_id: "txn_missing".to_string(),
        })
        .await
        .expect("2xx must not be promoted to an error");

    assert_eq!(response.status, ResponseStatus::Failed);
    assert_eq!(response.provider_status(), ProviderStatus::NotFound);
}

#[tokio::test]
async fn undecodable_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/total-balance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, Environment::Sandbox)
        .get_total_balance_summary()
        .await
        .expect_err("html body must fail to decode");

    assert!(matches!(err, NineJaPayError::InvalidResponse { .. }));
    assert_eq!(err.http_status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn simulate_deposit_in_sandbox() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transactions/simulate-deposit"))
        .and(body_json(json!({
            "recipientAccountNumber": "9901234567",
            "amount": "5000.00",
            "authKey": "sandbox-auth"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "message": "Deposit simulated",
            "statusCode": "00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Environment::Sandbox)
        .simulate_deposit(&SimulateDepositRequest {
            recipient_account_number: "9901234567".to_string(),
            amount: "5000.00".to_string(),
            auth_key: "sandbox-auth".to_string(),
        })
        .await
        .expect("simulation should succeed");

    assert!(response.is_success());
}

#[tokio::test]
async fn simulate_deposit_in_production_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server, Environment::Production)
        .simulate_deposit(&SimulateDepositRequest {
            recipient_account_number: "".to_string(),
            amount: "not-a-number".to_string(),
            auth_key: "".to_string(),
        })
        .await
        .expect_err("production must be rejected");

    assert!(matches!(err, NineJaPayError::Configuration { .. }));
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

struct RotatingCredentials;

#[async_trait]
impl CredentialSource for RotatingCredentials {
    async fn credentials(&self) -> NineJaPayResult<Credentials> {
        Ok(Credentials::new("rotated-key", "rotated-secret"))
    }
}

#[tokio::test]
async fn injected_credential_source_supplies_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/virtual-accounts/9901234567"))
        .and(header("api-key", "rotated-key"))
        .and(header("secret", "rotated-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "accountNumber": "9901234567",
            "accountName": "Main",
            "businessId": "biz_1",
            "status": "Active"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = NineJaPayClient::with_credentials(
        NineJaPayConfig::new("", "", Environment::Sandbox).with_base_url(server.uri()),
        Arc::new(RotatingCredentials),
    )
    .expect("client init should succeed");

    let account = client
        .get_virtual_account("9901234567")
        .await
        .expect("lookup should succeed");
    assert_eq!(account.data.map(|a| a.account_name), Some("Main".to_string()));
}
