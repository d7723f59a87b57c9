//! HTTP behaviour of `StorefrontApi` against a mock server.

use serde_json::json;
use storefront_client::{ApiSettings, CatalogService, ClientError, OrderService, StorefrontApi};
use storefront_core::{Money, OrderFailure, OrderLine, OrderRequest};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> StorefrontApi {
    let settings = ApiSettings {
        base_url: format!("{}/", server.uri()),
        ..ApiSettings::default()
    };
    StorefrontApi::new(&settings).unwrap()
}

fn lessons_body() -> serde_json::Value {
    json!([
        { "_id": "m1", "subject": "Math", "location": "Hendon", "price": 20, "spaces": 3 },
        { "_id": "a1", "subject": "Art", "location": "Colindale", "price": 15.5, "spaces": 0 }
    ])
}

fn order() -> OrderRequest {
    OrderRequest {
        name: "Ada".to_string(),
        phone: "07123456789".to_string(),
        lessons: vec![OrderLine {
            id: "m1".to_string(),
            subject: "Math".to_string(),
            location: "Hendon".to_string(),
            price: Money::from_cents(2000),
            quantity: 1,
        }],
        total_amount: Money::from_cents(2000),
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_load_all_parses_lessons() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lessons_body()))
        .expect(1)
        .mount(&server)
        .await;

    let lessons = api_for(&server).load_all().await.unwrap();

    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].id, "m1");
    assert_eq!(lessons[1].price, Money::from_cents(1550));
    assert_eq!(lessons[1].spaces, 0);
}

#[tokio::test]
async fn test_load_all_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = api_for(&server).load_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_load_all_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lessons": [] })))
        .mount(&server)
        .await;

    let err = api_for(&server).load_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_search_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "art & design"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let lessons = api_for(&server).search("art & design").await.unwrap();
    assert!(lessons.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let settings = ApiSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        connect_timeout_secs: 1,
    };
    let api = StorefrontApi::new(&settings).unwrap();

    let err = api.load_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_place_order_sends_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(json!({
            "name": "Ada",
            "phone": "07123456789",
            "lessons": [{
                "id": "m1",
                "subject": "Math",
                "location": "Hendon",
                "price": 20,
                "quantity": 1
            }],
            "totalAmount": 20
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "orderNumber": "ORD-1001" })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = api_for(&server).place_order(&order()).await.unwrap();
    assert_eq!(receipt.confirmation().as_deref(), Some("ORD-1001"));
}

#[tokio::test]
async fn test_place_order_accepts_numeric_order_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderId": 77 })))
        .mount(&server)
        .await;

    let receipt = api_for(&server).place_order(&order()).await.unwrap();
    assert_eq!(receipt.confirmation().as_deref(), Some("77"));
}

#[tokio::test]
async fn test_rejected_order_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Lesson full" })))
        .mount(&server)
        .await;

    let failure = api_for(&server)
        .place_order(&order())
        .await
        .unwrap_err()
        .into_order_failure();

    assert_eq!(
        failure,
        OrderFailure::Rejected {
            status: 400,
            message: Some("Lesson full".to_string())
        }
    );
    assert_eq!(failure.user_message(), "Lesson full");
}

#[tokio::test]
async fn test_rejected_order_without_json_body_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let failure = api_for(&server)
        .place_order(&order())
        .await
        .unwrap_err()
        .into_order_failure();

    assert_eq!(failure.user_message(), "Failed to place order");
}
