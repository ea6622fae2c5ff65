use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::item::{ItemRequest, ItemView, PagedItemView};
use crate::{
    domain::item::{ItemService, ItemServiceApi},
    error::{AppError, AppResult},
};

/// Query parameters for the paged item list
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

pub struct ItemController {
    item_service: Arc<ItemService>,
    default_page_size: u32,
}

impl ItemController {
    pub fn new(item_service: Arc<ItemService>, default_page_size: u32) -> Self {
        Self {
            item_service,
            default_page_size,
        }
    }

    /// GET /api/items - One page of items
    pub async fn list_items(
        State(controller): State<Arc<ItemController>>,
        Query(params): Query<PageParams>,
    ) -> AppResult<Json<PagedItemView>> {
        let page = controller
            .item_service
            .list_items(
                params.page_no.unwrap_or(0),
                params.page_size.unwrap_or(controller.default_page_size),
            )
            .await?;
        Ok(Json(page))
    }

    /// POST /api/items - Create item
    pub async fn create_item(
        State(controller): State<Arc<ItemController>>,
        Json(request): Json<ItemRequest>,
    ) -> AppResult<(StatusCode, Json<ItemView>)> {
        let item = controller.item_service.create_item(request).await?;
        Ok((StatusCode::CREATED, Json(item)))
    }

    /// GET /api/items/{itemId}
    pub async fn get_item(
        State(controller): State<Arc<ItemController>>,
        Path(item_id): Path<i32>,
    ) -> AppResult<Json<ItemView>> {
        let item = controller.item_service.get_item(item_id).await?;
        Ok(Json(item))
    }

    /// GET /api/item-types/{itemType} - First item of a type
    pub async fn get_item_by_type(
        State(controller): State<Arc<ItemController>>,
        Path(item_type): Path<String>,
    ) -> AppResult<Json<ItemView>> {
        let item = controller
            .item_service
            .find_item_by_type(&item_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No item of type {}", item_type)))?;
        Ok(Json(item))
    }

    /// PUT /api/items/{itemId} - Replace name and type
    pub async fn update_item(
        State(controller): State<Arc<ItemController>>,
        Path(item_id): Path<i32>,
        Json(request): Json<ItemRequest>,
    ) -> AppResult<Json<ItemView>> {
        let item = controller.item_service.update_item(item_id, request).await?;
        Ok(Json(item))
    }

    /// DELETE /api/items/{itemId}
    pub async fn delete_item(
        State(controller): State<Arc<ItemController>>,
        Path(item_id): Path<i32>,
    ) -> AppResult<StatusCode> {
        controller.item_service.delete_item(item_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
