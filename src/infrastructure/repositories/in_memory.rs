use super::entity_store::{AccountStore, EntityStore, ItemStore, ReviewStore};
use crate::domain::account::error::USERNAME_TAKEN;
use crate::domain::account::Account;
use crate::domain::item::Item;
use crate::domain::review::Review;
use crate::domain::shared::{Entity, Page, PageRequest, UNSAVED_ID};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

pub type InMemoryItemRepository = InMemoryStore<Item>;
pub type InMemoryReviewRepository = InMemoryStore<Review>;
pub type InMemoryAccountRepository = InMemoryStore<Account>;

/// Record kinds the in-memory store can hold.
///
/// `conflicts_with` mirrors the unique constraints of the SQL schema; it is
/// checked against every other stored record while the write lock is held.
pub trait StoredRecord: Entity {
    fn conflicts_with(&self, _other: &Self) -> Option<AppError> {
        None
    }
}

impl StoredRecord for Item {}

impl StoredRecord for Review {}

impl StoredRecord for Account {
    fn conflicts_with(&self, other: &Self) -> Option<AppError> {
        (self.username == other.username)
            .then(|| AppError::Conflict(USERNAME_TAKEN.to_string()))
    }
}

struct Records<T> {
    by_id: BTreeMap<i32, T>,
    last_id: i32,
}

/// Process-local store keyed by id. Iteration follows id order, which is
/// insertion order for store-assigned ids.
pub struct InMemoryStore<T> {
    records: RwLock<Records<T>>,
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                by_id: BTreeMap::new(),
                last_id: UNSAVED_ID,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .by_id
            .values()
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: StoredRecord> EntityStore<T> for InMemoryStore<T> {
    async fn save(&self, mut record: T) -> AppResult<T> {
        let mut records = self.records.write();
        if let Some(err) = records
            .by_id
            .values()
            .filter(|existing| existing.id() != record.id())
            .find_map(|existing| record.conflicts_with(existing))
        {
            return Err(err);
        }

        if record.is_new() {
            records.last_id += 1;
            record.assign_id(records.last_id);
        } else {
            records.last_id = records.last_id.max(record.id());
        }
        records.by_id.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>> {
        Ok(self.records.read().by_id.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.records.read().by_id.values().cloned().collect())
    }

    async fn find_all_paged(&self, request: PageRequest) -> AppResult<Page<T>> {
        let records = self.records.read();
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = records
            .by_id
            .values()
            .skip(offset)
            .take(request.page_size as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, records.by_id.len() as i64))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.records.write().by_id.remove(&id);
        Ok(())
    }

    async fn delete(&self, record: &T) -> AppResult<()> {
        self.delete_by_id(record.id()).await
    }
}

#[async_trait]
impl ItemStore for InMemoryStore<Item> {
    async fn find_by_type(&self, item_type: &str) -> AppResult<Option<Item>> {
        Ok(self
            .filter(|item| item.item_type == item_type)
            .into_iter()
            .next())
    }
}

#[async_trait]
impl ReviewStore for InMemoryStore<Review> {
    async fn find_by_item_id(&self, item_id: i32) -> AppResult<Vec<Review>> {
        Ok(self.filter(|review| review.item_id == Some(item_id)))
    }
}

#[async_trait]
impl AccountStore for InMemoryStore<Account> {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self
            .filter(|account| account.username == username)
            .into_iter()
            .next())
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self
            .records
            .read()
            .by_id
            .values()
            .any(|account| account.username == username))
    }
}
