use super::Review;
use serde::{Deserialize, Serialize};

pub const MIN_STARS: i32 = 1;
pub const MAX_STARS: i32 = 5;

/// Public representation of a review, with the owner flattened to `item_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub stars: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
}

/// Body for creating or updating a review.
///
/// `id` is ignored. On update, `item_id` re-points the review to another item;
/// when absent the item from the request path is kept as owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub title: String,
    pub content: String,
    pub stars: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
}

impl ReviewRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>, stars: i32) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            stars,
            item_id: None,
        }
    }

    pub fn with_item_id(mut self, item_id: i32) -> Self {
        self.item_id = Some(item_id);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_STARS..=MAX_STARS).contains(&self.stars) {
            return Err(format!(
                "Stars must be between {} and {}",
                MIN_STARS, MAX_STARS
            ));
        }
        Ok(())
    }
}

impl From<Review> for ReviewView {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            title: review.title,
            content: review.content,
            stars: review.stars,
            item_id: review.item_id,
        }
    }
}
