use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::review::{ReviewRequest, ReviewView};
use crate::{
    domain::review::{ReviewService, ReviewServiceApi},
    error::AppResult,
};

pub struct ReviewController {
    review_service: Arc<ReviewService>,
}

impl ReviewController {
    pub fn new(review_service: Arc<ReviewService>) -> Self {
        Self { review_service }
    }

    /// GET /api/items/{itemId}/reviews
    pub async fn list_item_reviews(
        State(controller): State<Arc<ReviewController>>,
        Path(item_id): Path<i32>,
    ) -> AppResult<Json<Vec<ReviewView>>> {
        let reviews = controller
            .review_service
            .get_reviews_by_item_id(item_id)
            .await?;
        Ok(Json(reviews))
    }

    /// POST /api/items/{itemId}/reviews
    pub async fn create_review(
        State(controller): State<Arc<ReviewController>>,
        Path(item_id): Path<i32>,
        Json(request): Json<ReviewRequest>,
    ) -> AppResult<(StatusCode, Json<ReviewView>)> {
        let review = controller
            .review_service
            .create_review(item_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(review)))
    }

    /// GET /api/reviews
    pub async fn list_reviews(
        State(controller): State<Arc<ReviewController>>,
    ) -> AppResult<Json<Vec<ReviewView>>> {
        let reviews = controller.review_service.get_all_reviews().await?;
        Ok(Json(reviews))
    }

    /// PUT /api/items/{itemId}/reviews/{reviewId}
    pub async fn update_review(
        State(controller): State<Arc<ReviewController>>,
        Path((item_id, review_id)): Path<(i32, i32)>,
        Json(request): Json<ReviewRequest>,
    ) -> AppResult<Json<ReviewView>> {
        let review = controller
            .review_service
            .update_review(item_id, review_id, request)
            .await?;
        Ok(Json(review))
    }

    /// DELETE /api/items/{itemId}/reviews/{reviewId}
    pub async fn delete_review(
        State(controller): State<Arc<ReviewController>>,
        Path((item_id, review_id)): Path<(i32, i32)>,
    ) -> AppResult<StatusCode> {
        controller
            .review_service
            .delete_review(item_id, review_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
