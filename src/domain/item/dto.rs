use super::Item;
use crate::domain::shared::PagedResponse;
use serde::{Deserialize, Serialize};

/// Public representation of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

/// Body for creating or updating an item. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

pub type PagedItemView = PagedResponse<ItemView>;

impl ItemRequest {
    pub fn new(name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            item_type: item_type.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Item name must not be empty".to_string());
        }
        if self.item_type.trim().is_empty() {
            return Err("Item type must not be empty".to_string());
        }
        Ok(())
    }
}

impl From<ItemRequest> for Item {
    fn from(request: ItemRequest) -> Self {
        Item::new(request.name, request.item_type)
    }
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            item_type: item.item_type,
        }
    }
}
