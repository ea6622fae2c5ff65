use crate::e2e::helpers;

use helpers::assertions::assert_review_response;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use review_backend::domain::review::ReviewView;
use serde_json::json;
use test_context::test_context;

/// Starters plus reviews 1 (item 1), 2 and 3 (item 2)
async fn seed(ctx: &TestContext) {
    ctx.fixtures.create_starters().await.unwrap();
    ctx.fixtures
        .create_review(1, "Strong Pokemon", "Really good in battles", 5)
        .await
        .unwrap();
    ctx.fixtures
        .create_review(2, "Average Pokemon", "Not too strong, not too weak", 3)
        .await
        .unwrap();
    ctx.fixtures
        .create_review(2, "Weak Pokemon", "Weak Pokemon, needs training", 2)
        .await
        .unwrap();
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_a_review_for_an_item(ctx: &TestContext) {
    ctx.fixtures.create_starters().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/items/2/reviews",
            &json!({
                "title": "Good Pokemon",
                "content": "Little bit good in battles",
                "stars": 3
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    assert_review_response(response.body.as_ref().unwrap(), "Good Pokemon", 3, 2);
    assert_eq!(ctx.fixtures.review_count(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_create_review_for_nonexistent_item(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/items/99/reviews",
            &json!({
                "title": "Good Pokemon",
                "content": "Little bit good in battles",
                "stars": 3
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Item with associated review not found");
    assert_eq!(ctx.fixtures.review_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_out_of_range_stars(ctx: &TestContext) {
    ctx.fixtures.create_starters().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/items/1/reviews",
            &json!({ "title": "Too good", "content": "Eleven out of five", "stars": 11 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.fixtures.review_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_reviews_of_an_item_in_insertion_order(ctx: &TestContext) {
    seed(ctx).await;

    let created: ReviewView = ctx
        .client
        .post(
            "/api/items/2/reviews",
            &json!({ "title": "Solid", "content": "Reliable starter", "stars": 4 }),
        )
        .await
        .unwrap()
        .json()
        .unwrap();

    let response = ctx.client.get("/api/items/2/reviews").await.unwrap();
    response.assert_status(StatusCode::OK);

    let reviews: Vec<ReviewView> = response.json().unwrap();
    assert_eq!(
        reviews.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![2, 3, created.id]
    );
    assert!(reviews.iter().all(|r| r.item_id == Some(2)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_reviews(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx.client.get("/api/reviews").await.unwrap();
    response.assert_status(StatusCode::OK);

    let reviews = response.body.as_ref().unwrap().as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_review_response(&reviews[0], "Strong Pokemon", 5, 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_update_and_repoint_a_review(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx
        .client
        .put(
            "/api/items/1/reviews/1",
            &json!({
                "title": "Good Pokemon",
                "content": "Little bit good in battles",
                "stars": 3,
                "item_id": 3
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().unwrap(),
        &json!({
            "id": 1,
            "title": "Good Pokemon",
            "content": "Little bit good in battles",
            "stars": 3,
            "item_id": 3
        })
    );

    let item_one: Vec<ReviewView> = ctx
        .client
        .get("/api/items/1/reviews")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert!(item_one.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_when_updating_nonexistent_review(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx
        .client
        .put(
            "/api/items/1/reviews/99",
            &json!({ "title": "Ghost", "content": "Not there", "stars": 1 }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Review could not be found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_delete_a_review(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx.client.delete("/api/items/1/reviews/1").await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    assert_eq!(ctx.fixtures.review_count(), 2);
    let reviews: Vec<ReviewView> = ctx
        .client
        .get("/api/reviews")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert!(reviews.iter().all(|r| r.id != 1));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_when_deleting_nonexistent_review(ctx: &TestContext) {
    seed(ctx).await;

    let response = ctx.client.delete("/api/items/1/reviews/99").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(ctx.fixtures.review_count(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_remove_reviews_with_their_item(ctx: &TestContext) {
    seed(ctx).await;

    ctx.client
        .delete("/api/items/2")
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    // Its reviews went with it
    let reviews: Vec<ReviewView> = ctx
        .client
        .get("/api/reviews")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].item_id, Some(1));
    assert_eq!(ctx.fixtures.review_count(), 1);

    // The owner is gone, so new reviews for it are refused
    let response = ctx
        .client
        .post(
            "/api/items/2/reviews",
            &json!({ "title": "Late", "content": "Too late", "stars": 1 }),
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Item with associated review not found");
}
