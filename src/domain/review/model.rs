use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::item::Item;
use crate::domain::shared::{Entity, UNSAVED_ID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub stars: i32,
    /// Owning item; `None` until the review is attached
    pub item_id: Option<i32>,
}

impl Review {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        stars: i32,
        item_id: Option<i32>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            content: content.into(),
            stars,
            item_id,
        }
    }

    pub fn attach_to(&mut self, item: &Item) {
        self.item_id = Some(item.id);
    }

    pub fn belongs_to(&self, item_id: i32) -> bool {
        self.item_id == Some(item_id)
    }
}

impl Entity for Review {
    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}
