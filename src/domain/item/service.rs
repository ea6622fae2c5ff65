use super::error::{ItemServiceError, ITEM_NOT_DELETED, ITEM_NOT_FOUND, ITEM_NOT_UPDATED};
use crate::domain::item::{Item, ItemRequest, ItemView, PagedItemView};
use crate::domain::shared::PageRequest;
use crate::infrastructure::repositories::{ItemStore, ReviewStore};
use async_trait::async_trait;
use std::sync::Arc;

pub struct ItemService {
    item_repo: Arc<dyn ItemStore>,
    review_repo: Arc<dyn ReviewStore>,
}

impl ItemService {
    pub fn new(item_repo: Arc<dyn ItemStore>, review_repo: Arc<dyn ReviewStore>) -> Self {
        Self {
            item_repo,
            review_repo,
        }
    }
}

#[async_trait]
pub trait ItemServiceApi: Send + Sync {
    async fn create_item(&self, request: ItemRequest) -> Result<ItemView, ItemServiceError>;

    async fn list_items(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PagedItemView, ItemServiceError>;

    async fn get_item(&self, item_id: i32) -> Result<ItemView, ItemServiceError>;

    async fn find_item_by_type(
        &self,
        item_type: &str,
    ) -> Result<Option<ItemView>, ItemServiceError>;

    async fn update_item(
        &self,
        item_id: i32,
        request: ItemRequest,
    ) -> Result<ItemView, ItemServiceError>;

    async fn delete_item(&self, item_id: i32) -> Result<(), ItemServiceError>;
}

#[async_trait]
impl ItemServiceApi for ItemService {
    async fn create_item(&self, request: ItemRequest) -> Result<ItemView, ItemServiceError> {
        request.validate().map_err(ItemServiceError::Invalid)?;

        let saved = self.item_repo.save(Item::from(request)).await?;
        tracing::info!(item_id = saved.id, "Item created");

        Ok(ItemView::from(saved))
    }

    async fn list_items(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PagedItemView, ItemServiceError> {
        let request = PageRequest::new(page_number, page_size);
        request.validate().map_err(ItemServiceError::Invalid)?;

        let page = self.item_repo.find_all_paged(request).await?;
        Ok(page.into_response(request))
    }

    async fn get_item(&self, item_id: i32) -> Result<ItemView, ItemServiceError> {
        let item = self.find_item(item_id, ITEM_NOT_FOUND).await?;
        Ok(ItemView::from(item))
    }

    async fn find_item_by_type(
        &self,
        item_type: &str,
    ) -> Result<Option<ItemView>, ItemServiceError> {
        let item = self.item_repo.find_by_type(item_type).await?;
        Ok(item.map(ItemView::from))
    }

    async fn update_item(
        &self,
        item_id: i32,
        request: ItemRequest,
    ) -> Result<ItemView, ItemServiceError> {
        request.validate().map_err(ItemServiceError::Invalid)?;

        let mut item = self.find_item(item_id, ITEM_NOT_UPDATED).await?;
        item.name = request.name;
        item.item_type = request.item_type;

        let updated = self.item_repo.save(item).await?;
        tracing::info!(item_id = updated.id, "Item updated");

        Ok(ItemView::from(updated))
    }

    async fn delete_item(&self, item_id: i32) -> Result<(), ItemServiceError> {
        let item = self.find_item(item_id, ITEM_NOT_DELETED).await?;

        // Reviews go with their item
        let reviews = self.review_repo.find_by_item_id(item.id).await?;
        for review in &reviews {
            self.review_repo.delete(review).await?;
        }

        self.item_repo.delete(&item).await?;
        tracing::info!(item_id, reviews_removed = reviews.len(), "Item deleted");

        Ok(())
    }
}

impl ItemService {
    async fn find_item(&self, item_id: i32, missing: &str) -> Result<Item, ItemServiceError> {
        self.item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ItemServiceError::NotFound(missing.to_string()))
    }
}
