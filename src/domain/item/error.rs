use crate::error::AppError;

pub const ITEM_NOT_FOUND: &str = "Item could not be found";
pub const ITEM_NOT_UPDATED: &str = "Item could not be updated";
pub const ITEM_NOT_DELETED: &str = "Item could not be delete";

#[derive(Debug, thiserror::Error)]
pub enum ItemServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ItemServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ItemServiceError::Invalid(msg),
            AppError::NotFound(msg) => ItemServiceError::NotFound(msg),
            _ => ItemServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ItemServiceError> for AppError {
    fn from(err: ItemServiceError) -> Self {
        match err {
            ItemServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ItemServiceError::NotFound(msg) => AppError::NotFound(msg),
            ItemServiceError::Dependency(msg) => AppError::Internal(msg),
            ItemServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
