use super::entity_store::{EntityStore, ReviewStore};
use crate::domain::review::Review;
use crate::domain::shared::{Entity, Page, PageRequest};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL-backed review store
pub struct ReviewRepository {
    pool: Arc<DbPool>,
}

impl ReviewRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Review> for ReviewRepository {
    async fn save(&self, review: Review) -> AppResult<Review> {
        let pool = self.pool.as_ref();
        if review.is_new() {
            let saved = sqlx::query_as::<_, Review>(
                r#"
                INSERT INTO reviews (title, content, stars, item_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, content, stars, item_id
                "#,
            )
            .bind(&review.title)
            .bind(&review.content)
            .bind(review.stars)
            .bind(review.item_id)
            .fetch_one(pool)
            .await?;

            return Ok(saved);
        }

        let saved = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, title, content, stars, item_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                content = EXCLUDED.content,
                stars = EXCLUDED.stars,
                item_id = EXCLUDED.item_id
            RETURNING id, title, content, stars, item_id
            "#,
        )
        .bind(review.id)
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.stars)
        .bind(review.item_id)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Review>> {
        let pool = self.pool.as_ref();
        let review = sqlx::query_as::<_, Review>(
            "SELECT id, title, content, stars, item_id FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(review)
    }

    async fn find_all(&self) -> AppResult<Vec<Review>> {
        let pool = self.pool.as_ref();
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT id, title, content, stars, item_id FROM reviews ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }

    async fn find_all_paged(&self, request: PageRequest) -> AppResult<Page<Review>> {
        let pool = self.pool.as_ref();
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, content, stars, item_id
            FROM reviews
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await?;

        Ok(Page::new(reviews, total))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, review: &Review) -> AppResult<()> {
        self.delete_by_id(review.id).await
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn find_by_item_id(&self, item_id: i32) -> AppResult<Vec<Review>> {
        let pool = self.pool.as_ref();
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, content, stars, item_id
            FROM reviews
            WHERE item_id = $1
            ORDER BY id
            "#,
        )
        .bind(item_id)
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }
}
