use super::error::{ReviewServiceError, REVIEW_ITEM_NOT_FOUND, REVIEW_NOT_FOUND};
use crate::domain::item::Item;
use crate::domain::review::{Review, ReviewRequest, ReviewView};
use crate::infrastructure::repositories::{ItemStore, ReviewStore};
use async_trait::async_trait;
use std::sync::Arc;

pub struct ReviewService {
    review_repo: Arc<dyn ReviewStore>,
    item_repo: Arc<dyn ItemStore>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewStore>, item_repo: Arc<dyn ItemStore>) -> Self {
        Self {
            review_repo,
            item_repo,
        }
    }
}

#[async_trait]
pub trait ReviewServiceApi: Send + Sync {
    async fn create_review(
        &self,
        item_id: i32,
        request: ReviewRequest,
    ) -> Result<ReviewView, ReviewServiceError>;

    async fn get_reviews_by_item_id(
        &self,
        item_id: i32,
    ) -> Result<Vec<ReviewView>, ReviewServiceError>;

    async fn get_all_reviews(&self) -> Result<Vec<ReviewView>, ReviewServiceError>;

    async fn update_review(
        &self,
        item_id: i32,
        review_id: i32,
        request: ReviewRequest,
    ) -> Result<ReviewView, ReviewServiceError>;

    async fn delete_review(&self, item_id: i32, review_id: i32)
        -> Result<(), ReviewServiceError>;
}

#[async_trait]
impl ReviewServiceApi for ReviewService {
    async fn create_review(
        &self,
        item_id: i32,
        request: ReviewRequest,
    ) -> Result<ReviewView, ReviewServiceError> {
        request.validate().map_err(ReviewServiceError::Invalid)?;

        let item = self.find_owner(item_id).await?;

        let mut review = Review::new(request.title, request.content, request.stars, None);
        review.attach_to(&item);

        let saved = self.review_repo.save(review).await?;
        tracing::info!(review_id = saved.id, item_id = item.id, "Review created");

        Ok(ReviewView::from(saved))
    }

    async fn get_reviews_by_item_id(
        &self,
        item_id: i32,
    ) -> Result<Vec<ReviewView>, ReviewServiceError> {
        let reviews = self.review_repo.find_by_item_id(item_id).await?;
        Ok(reviews.into_iter().map(ReviewView::from).collect())
    }

    async fn get_all_reviews(&self) -> Result<Vec<ReviewView>, ReviewServiceError> {
        let reviews = self.review_repo.find_all().await?;
        Ok(reviews.into_iter().map(ReviewView::from).collect())
    }

    async fn update_review(
        &self,
        item_id: i32,
        review_id: i32,
        request: ReviewRequest,
    ) -> Result<ReviewView, ReviewServiceError> {
        request.validate().map_err(ReviewServiceError::Invalid)?;

        self.find_owner(item_id).await?;
        let mut review = self.find_review(review_id).await?;

        let owner = self
            .find_owner(request.item_id.unwrap_or(item_id))
            .await?;

        review.title = request.title;
        review.content = request.content;
        review.stars = request.stars;
        review.attach_to(&owner);

        let updated = self.review_repo.save(review).await?;
        tracing::info!(review_id = updated.id, item_id = owner.id, "Review updated");

        Ok(ReviewView::from(updated))
    }

    async fn delete_review(
        &self,
        item_id: i32,
        review_id: i32,
    ) -> Result<(), ReviewServiceError> {
        let review = self.find_review(review_id).await?;

        // Lookup is by review id alone, so a review of another item can be
        // deleted through this path.
        if !review.belongs_to(item_id) {
            tracing::warn!(
                review_id,
                item_id,
                owner_id = ?review.item_id,
                "Deleting review through an item that does not own it"
            );
        }

        self.review_repo.delete(&review).await?;
        tracing::info!(review_id, "Review deleted");

        Ok(())
    }
}

impl ReviewService {
    async fn find_owner(&self, item_id: i32) -> Result<Item, ReviewServiceError> {
        self.item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ReviewServiceError::NotFound(REVIEW_ITEM_NOT_FOUND.to_string()))
    }

    async fn find_review(&self, review_id: i32) -> Result<Review, ReviewServiceError> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ReviewServiceError::NotFound(REVIEW_NOT_FOUND.to_string()))
    }
}
