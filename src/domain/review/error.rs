use crate::error::AppError;

pub const REVIEW_ITEM_NOT_FOUND: &str = "Item with associated review not found";
pub const REVIEW_NOT_FOUND: &str = "Review could not be found";

#[derive(Debug, thiserror::Error)]
pub enum ReviewServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ReviewServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ReviewServiceError::Invalid(msg),
            AppError::NotFound(msg) => ReviewServiceError::NotFound(msg),
            _ => ReviewServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ReviewServiceError> for AppError {
    fn from(err: ReviewServiceError) -> Self {
        match err {
            ReviewServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ReviewServiceError::NotFound(msg) => AppError::NotFound(msg),
            ReviewServiceError::Dependency(msg) => AppError::Internal(msg),
            ReviewServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
