use anyhow::Result;
use review_backend::domain::{account::Account, item::Item, review::Review};
use review_backend::infrastructure::repositories::{
    EntityStore, InMemoryAccountRepository, InMemoryItemRepository, InMemoryReviewRepository,
};
use std::sync::Arc;

pub const STARTERS: [(&str, &str); 4] = [
    ("Pikachu", "Electric"),
    ("Bulbasaur", "Grass"),
    ("Charmander", "Fire"),
    ("Squirtle", "Water"),
];

/// Seeds records straight into the stores behind the running app
pub struct TestFixtures {
    pub items: Arc<InMemoryItemRepository>,
    pub reviews: Arc<InMemoryReviewRepository>,
    pub accounts: Arc<InMemoryAccountRepository>,
}

impl TestFixtures {
    pub async fn create_item(&self, name: &str, item_type: &str) -> Result<Item> {
        Ok(self.items.save(Item::new(name, item_type)).await?)
    }

    /// Items 1..=4: Pikachu, Bulbasaur, Charmander, Squirtle
    pub async fn create_starters(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for (name, item_type) in STARTERS {
            items.push(self.create_item(name, item_type).await?);
        }
        Ok(items)
    }

    pub async fn create_review(
        &self,
        item_id: i32,
        title: &str,
        content: &str,
        stars: i32,
    ) -> Result<Review> {
        Ok(self
            .reviews
            .save(Review::new(title, content, stars, Some(item_id)))
            .await?)
    }

    pub async fn create_account(&self, username: &str, password: &str) -> Result<Account> {
        Ok(self.accounts.save(Account::new(username, password)).await?)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}
