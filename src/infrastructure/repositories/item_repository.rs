use super::entity_store::{EntityStore, ItemStore};
use crate::domain::item::Item;
use crate::domain::shared::{Entity, Page, PageRequest};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL-backed item store
pub struct ItemRepository {
    pool: Arc<DbPool>,
}

impl ItemRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Item> for ItemRepository {
    async fn save(&self, item: Item) -> AppResult<Item> {
        let pool = self.pool.as_ref();
        if item.is_new() {
            let saved = sqlx::query_as::<_, Item>(
                r#"
                INSERT INTO items (name, item_type)
                VALUES ($1, $2)
                RETURNING id, name, item_type
                "#,
            )
            .bind(&item.name)
            .bind(&item.item_type)
            .fetch_one(pool)
            .await?;

            return Ok(saved);
        }

        let saved = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (id, name, item_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, item_type = EXCLUDED.item_type
            RETURNING id, name, item_type
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.item_type)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Item>> {
        let pool = self.pool.as_ref();
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, item_type FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(item)
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        let pool = self.pool.as_ref();
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, item_type FROM items ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    async fn find_all_paged(&self, request: PageRequest) -> AppResult<Page<Item>> {
        let pool = self.pool.as_ref();
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, item_type
            FROM items
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;

        Ok(Page::new(items, total))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, item: &Item) -> AppResult<()> {
        self.delete_by_id(item.id).await
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn find_by_type(&self, item_type: &str) -> AppResult<Option<Item>> {
        let pool = self.pool.as_ref();
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, item_type
            FROM items
            WHERE item_type = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(item_type)
        .fetch_optional(pool)
        .await?;

        Ok(item)
    }
}
