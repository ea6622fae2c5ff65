use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::shared::{Entity, UNSAVED_ID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub item_type: String,
}

impl Item {
    /// A new, not yet persisted item
    pub fn new(name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            item_type: item_type.into(),
        }
    }
}

impl Entity for Item {
    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}
