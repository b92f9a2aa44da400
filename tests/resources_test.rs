use httpmock::prelude::*;
use yookassa_sdk::domain::common::{Amount, Settlement};
use yookassa_sdk::domain::deal::{DealFilter, DealStatus, FeeMoment, NewDeal};
use yookassa_sdk::domain::receipt::{
    NewReceipt, ReceiptCustomer, ReceiptFilter, ReceiptItem, ReceiptStatus, ReceiptType,
};
use yookassa_sdk::domain::refund::{NewRefund, RefundFilter, RefundStatus};
use yookassa_sdk::Client;

fn client_for(server: &MockServer) -> Client {
    Client::new("123456", "test_secret").with_base_url(server.url("/v3/"))
}

fn refund_json() -> serde_json::Value {
    serde_json::json!({
        "id": "216749f7-0016-50be-b000-078d43a63ae4",
        "payment_id": "216749da-000f-50be-b000-096747fad91e",
        "status": "succeeded",
        "amount": {"value": "1.00", "currency": "RUB"},
        "created_at": "2024-03-02T11:00:00.000Z",
        "description": "Damaged item"
    })
}

fn deal_json() -> serde_json::Value {
    serde_json::json!({
        "id": "dl-2d9f9b3e-000f-5000-8000-1a6b3c1c2d01",
        "type": "safe_deal",
        "fee_moment": "deal_closed",
        "balance": {"value": "0.00", "currency": "RUB"},
        "payout_balance": {"value": "0.00", "currency": "RUB"},
        "status": "opened",
        "created_at": "2024-03-01T09:00:00.000Z",
        "expires_at": "2024-06-29T09:00:00.000Z",
        "test": true
    })
}

fn receipt_json() -> serde_json::Value {
    serde_json::json!({
        "id": "rt-2da5c87d-0384-50e8-a7f3-8d5646dd9e10",
        "type": "payment",
        "status": "pending",
        "payment_id": "216749da-000f-50be-b000-096747fad91e",
        "items": [{
            "description": "Coffee beans 1kg",
            "quantity": "1.000",
            "amount": {"value": "1500.00", "currency": "RUB"},
            "vat_code": 1
        }]
    })
}

#[tokio::test]
async fn test_refund_create_find_list() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v3/refunds")
            .header_exists("idempotence-key")
            .json_body(serde_json::json!({
                "payment_id": "216749da-000f-50be-b000-096747fad91e",
                "amount": {"value": "1.00", "currency": "RUB"},
                "description": "Damaged item"
            }));
        then.status(200).json_body(refund_json());
    });
    let find_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/refunds/216749f7-0016-50be-b000-078d43a63ae4");
        then.status(200).json_body(refund_json());
    });
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/refunds")
            .query_param("payment_id", "216749da-000f-50be-b000-096747fad91e")
            .query_param("status", "succeeded");
        then.status(200).json_body(serde_json::json!({
            "type": "list",
            "items": [refund_json()]
        }));
    });

    let client = client_for(&server);
    let mut refund = NewRefund::new("216749da-000f-50be-b000-096747fad91e", Amount::rub("1.00"));
    refund.description = Some("Damaged item".to_string());

    let created = client.refunds().create_refund(&refund).await.unwrap();
    assert_eq!(created.status, RefundStatus::Succeeded);

    let found = client.refunds().find_refund(&created.id).await.unwrap();
    assert_eq!(found.payment_id, "216749da-000f-50be-b000-096747fad91e");

    let filter = RefundFilter {
        payment_id: Some("216749da-000f-50be-b000-096747fad91e".to_string()),
        status: Some(RefundStatus::Succeeded),
        ..Default::default()
    };
    let page = client.refunds().find_refunds(&filter).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(!page.has_more());

    create_mock.assert();
    find_mock.assert();
    list_mock.assert();
}

#[tokio::test]
async fn test_deal_create_find_list() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v3/deals")
            .header("idempotence-key", "deal-order-5")
            .json_body(serde_json::json!({
                "type": "safe_deal",
                "fee_moment": "deal_closed",
                "description": "Marketplace order 5"
            }));
        then.status(200).json_body(deal_json());
    });
    let find_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/deals/dl-2d9f9b3e-000f-5000-8000-1a6b3c1c2d01");
        then.status(200).json_body(deal_json());
    });
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/deals")
            .query_param("status", "opened")
            .query_param("full_text_search", "Marketplace")
            .query_param("limit", "5");
        then.status(200).json_body(serde_json::json!({
            "type": "list",
            "items": [deal_json()],
            "next_cursor": "c2"
        }));
    });

    let client = client_for(&server);
    let mut deal = NewDeal::safe_deal(FeeMoment::DealClosed);
    deal.description = Some("Marketplace order 5".to_string());

    let created = client
        .deals()
        .with_idempotency_key("deal-order-5")
        .create_deal(&deal)
        .await
        .unwrap();
    assert_eq!(created.status, DealStatus::Opened);

    let found = client.deals().find_deal(&created.id).await.unwrap();
    assert_eq!(found.fee_moment, FeeMoment::DealClosed);

    let filter = DealFilter {
        status: Some(DealStatus::Opened),
        full_text_search: Some("Marketplace".to_string()),
        limit: Some(5),
        ..Default::default()
    };
    let page = client.deals().find_deals(&filter).await.unwrap();
    assert_eq!(page.next_cursor.as_deref(), Some("c2"));

    create_mock.assert();
    find_mock.assert();
    list_mock.assert();
}

#[tokio::test]
async fn test_receipt_create_find_list() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v3/receipts")
            .json_body(serde_json::json!({
                "type": "payment",
                "payment_id": "216749da-000f-50be-b000-096747fad91e",
                "customer": {"email": "buyer@example.com"},
                "items": [{
                    "description": "Coffee beans 1kg",
                    "quantity": "1.000",
                    "amount": {"value": "1500.00", "currency": "RUB"},
                    "vat_code": 1
                }],
                "send": true,
                "settlements": [{"type": "payout", "amount": {"value": "1500.00", "currency": "RUB"}}]
            }));
        then.status(200).json_body(receipt_json());
    });
    let find_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/receipts/rt-2da5c87d-0384-50e8-a7f3-8d5646dd9e10");
        then.status(200).json_body(receipt_json());
    });
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/receipts")
            .query_param("payment_id", "216749da-000f-50be-b000-096747fad91e");
        then.status(200).json_body(serde_json::json!({
            "type": "list",
            "items": [receipt_json()]
        }));
    });

    let client = client_for(&server);
    let receipt = NewReceipt {
        kind: ReceiptType::Payment,
        payment_id: Some("216749da-000f-50be-b000-096747fad91e".to_string()),
        refund_id: None,
        customer: ReceiptCustomer {
            email: Some("buyer@example.com".to_string()),
            ..Default::default()
        },
        items: vec![ReceiptItem {
            description: "Coffee beans 1kg".to_string(),
            quantity: "1.000".to_string(),
            amount: Amount::rub("1500.00"),
            vat_code: 1,
            payment_subject: None,
            payment_mode: None,
            measure: None,
        }],
        send: true,
        settlements: vec![Settlement::payout(Amount::rub("1500.00"))],
        tax_system_code: None,
    };

    let created = client.receipts().create_receipt(&receipt).await.unwrap();
    assert_eq!(created.status, ReceiptStatus::Pending);

    let found = client.receipts().find_receipt(&created.id).await.unwrap();
    assert_eq!(found.items[0].vat_code, 1);

    let filter = ReceiptFilter {
        payment_id: Some("216749da-000f-50be-b000-096747fad91e".to_string()),
        ..Default::default()
    };
    let page = client.receipts().find_receipts(&filter).await.unwrap();
    assert_eq!(page.items.len(), 1);

    create_mock.assert();
    find_mock.assert();
    list_mock.assert();
}

#[tokio::test]
async fn test_account_settings() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v3/me");
        then.status(200).json_body(serde_json::json!({
            "account_id": "123456",
            "status": "enabled",
            "test": true,
            "payment_methods": ["bank_card", "sbp"],
            "payout_methods": ["sbp"]
        }));
    });

    let settings = client_for(&server)
        .settings()
        .get_account_settings()
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(settings.account_id, "123456");
    assert!(settings.supports_payment_method("sbp"));
}
