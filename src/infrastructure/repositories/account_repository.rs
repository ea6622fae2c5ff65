use super::entity_store::{AccountStore, EntityStore};
use crate::domain::account::error::USERNAME_TAKEN;
use crate::domain::account::Account;
use crate::domain::shared::{Entity, Page, PageRequest};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL-backed account store
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(USERNAME_TAKEN.to_string());
        }
    }
    AppError::Database(e)
}

#[async_trait]
impl EntityStore<Account> for AccountRepository {
    async fn save(&self, account: Account) -> AppResult<Account> {
        let pool = self.pool.as_ref();
        if account.is_new() {
            let saved = sqlx::query_as::<_, Account>(
                r#"
                INSERT INTO accounts (username, password)
                VALUES ($1, $2)
                RETURNING id, username, password
                "#,
            )
            .bind(&account.username)
            .bind(&account.password)
            .fetch_one(pool)
            .await
            .map_err(map_unique_violation)?;

            return Ok(saved);
        }

        let saved = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, username, password)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username, password = EXCLUDED.password
            RETURNING id, username, password
            "#,
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.password)
        .fetch_one(pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Account>> {
        let pool = self.pool.as_ref();
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, password FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let pool = self.pool.as_ref();
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, username, password FROM accounts ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }

    async fn find_all_paged(&self, request: PageRequest) -> AppResult<Page<Account>> {
        let pool = self.pool.as_ref();
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, password
            FROM accounts
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(pool)
            .await?;

        Ok(Page::new(accounts, total))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, account: &Account) -> AppResult<()> {
        self.delete_by_id(account.id).await
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let pool = self.pool.as_ref();
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, password FROM accounts WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts
                WHERE username = $1
            )
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
