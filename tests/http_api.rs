//! Integration tests for the HTTP cart API client
//!
//! Uses wiremock to stand in for the cart service.

mod support;

use rust_decimal::Decimal;
use serde_json::json;
use testresult::TestResult;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use trolley::{
    api::{CartApi, CartApiError, HttpCartApi},
    cart::Cart,
};

use support::{EMPTY_CART_JSON, WIDGET_CART_JSON};

fn cart_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

#[tokio::test]
async fn get_cart_reads_payload() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(cart_response(WIDGET_CART_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let cart = Cart::from(HttpCartApi::new(server.uri()).get_cart().await?);

    assert_eq!(cart.total(), Decimal::new(1998, 2));
    assert_eq!(cart.total_quantity(), 2);

    Ok(())
}

#[tokio::test]
async fn add_product_posts_empty_object() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cart/products/7"))
        .and(body_json(json!({})))
        .respond_with(cart_response(WIDGET_CART_JSON))
        .expect(1)
        .mount(&server)
        .await;

    HttpCartApi::new(server.uri()).add_product(7).await?;

    Ok(())
}

#[tokio::test]
async fn set_quantity_puts_quantity() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/cart/products/7"))
        .and(body_json(json!({ "quantity": 0 })))
        .respond_with(cart_response(EMPTY_CART_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let cart = Cart::from(HttpCartApi::new(server.uri()).set_quantity(7, 0).await?);

    assert!(cart.is_empty());

    Ok(())
}

#[tokio::test]
async fn clear_cart_sends_delete() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/cart"))
        .respond_with(cart_response(EMPTY_CART_JSON))
        .expect(1)
        .mount(&server)
        .await;

    HttpCartApi::new(server.uri()).clear_cart().await?;

    Ok(())
}

#[tokio::test]
async fn bearer_token_is_attached() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(cart_response(EMPTY_CART_JSON))
        .expect(1)
        .mount(&server)
        .await;

    HttpCartApi::new(server.uri())
        .with_bearer_token("secret")
        .get_cart()
        .await?;

    Ok(())
}

#[tokio::test]
async fn error_status_carries_structured_fields() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cart/products/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Product not found" })),
        )
        .mount(&server)
        .await;

    let result = HttpCartApi::new(server.uri()).add_product(99).await;

    assert_eq!(
        result,
        Err(CartApiError::Api {
            status: 404,
            error: None,
            message: Some("Product not found".to_string()),
        })
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() -> TestResult {
    let result = HttpCartApi::new("http://127.0.0.1:1").get_cart().await;

    assert!(matches!(result, Err(CartApiError::Transport { message: Some(_) })));

    Ok(())
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_error() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(cart_response("not json"))
        .mount(&server)
        .await;

    let result = HttpCartApi::new(server.uri()).get_cart().await;

    assert!(matches!(result, Err(CartApiError::Transport { .. })));

    Ok(())
}
