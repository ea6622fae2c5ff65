use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use review_backend::domain::account::AccountView;
use serde_json::json;
use test_context::test_context;

async fn seed(ctx: &TestContext) {
    for (username, password) in [("Mark", "Mark001"), ("John", "John001"), ("Kane", "Kane001")] {
        ctx.fixtures.create_account(username, password).await.unwrap();
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_find_account_by_username(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx.client.get("/api/accounts/John").await.unwrap();

    response.assert_status(StatusCode::OK);
    // Password never leaves the service
    assert_eq!(
        response.body.as_ref().unwrap(),
        &json!({ "id": 2, "username": "John" })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_username(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx.client.get("/api/accounts/Bob").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_username_existence(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx.client.get("/api/accounts/Kane/exists").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap(), &json!({ "exists": true }));

    let response = ctx.client.get("/api/accounts/Bob/exists").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap(), &json!({ "exists": false }));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_register_an_account(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/accounts",
            &json!({ "username": "Bob", "password": "Bob001" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let created: AccountView = response.json().unwrap();
    assert_eq!(created.username, "Bob");
    assert!(created.id > 0);
    assert!(response.body.as_ref().unwrap().get("password").is_none());

    let fetched: AccountView = ctx
        .client
        .get("/api/accounts/Bob")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(fetched, created);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_taken_username(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx
        .client
        .post(
            "/api/accounts",
            &json!({ "username": "Mark", "password": "another" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::CONFLICT)
        .assert_error_message("Username is taken!");
}
