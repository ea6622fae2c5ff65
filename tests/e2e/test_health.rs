use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Plain text, not JSON
    assert_eq!(response.text(), "OK");
    assert!(response.body.is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_ready_on_in_memory_stores(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(
        body.get("database").and_then(|v| v.as_str()),
        Some("in-memory")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    // Error responses carry one too
    let response = ctx.client.get("/api/items/99").await.unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_client_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "trace-me-123")])
        .await
        .unwrap();

    assert_eq!(response.header("x-request-id"), Some("trace-me-123"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_unique_request_ids(ctx: &TestContext) {
    let first = ctx.client.get("/health").await.unwrap();
    let second = ctx.client.get("/health").await.unwrap();

    let first_id = first.header("x-request-id").unwrap();
    let second_id = second.header("x-request-id").unwrap();
    assert_ne!(first_id, second_id);
    assert!(uuid::Uuid::parse_str(first_id).is_ok());
}
