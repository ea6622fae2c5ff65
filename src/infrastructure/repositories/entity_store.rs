use crate::domain::account::Account;
use crate::domain::item::Item;
use crate::domain::review::Review;
use crate::domain::shared::{Entity, Page, PageRequest};
use crate::error::AppResult;
use async_trait::async_trait;

/// Keyed storage for one record kind.
///
/// Implementations own the canonical copy of every record; callers only ever
/// receive clones. Ids are assigned by the store on the first `save` of a
/// record whose id is unset and never change afterwards.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Insert or update a record, returning its persisted form
    async fn save(&self, record: T) -> AppResult<T>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>>;

    /// All records in id (insertion) order
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// One page of records in id order, with the total record count
    async fn find_all_paged(&self, request: PageRequest) -> AppResult<Page<T>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    async fn delete(&self, record: &T) -> AppResult<()>;
}

#[async_trait]
pub trait ItemStore: EntityStore<Item> {
    /// First item (by id) with the given type
    async fn find_by_type(&self, item_type: &str) -> AppResult<Option<Item>>;
}

#[async_trait]
pub trait ReviewStore: EntityStore<Review> {
    /// Reviews owned by `item_id`, in id order
    async fn find_by_item_id(&self, item_id: i32) -> AppResult<Vec<Review>>;
}

#[async_trait]
pub trait AccountStore: EntityStore<Account> {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;
}
