use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::shared::{Entity, UNSAVED_ID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i32,
    pub username: String,
    /// Stored exactly as submitted
    pub password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Entity for Account {
    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}
