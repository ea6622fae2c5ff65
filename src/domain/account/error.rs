use crate::error::AppError;

pub const USERNAME_TAKEN: &str = "Username is taken!";

#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for AccountServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => AccountServiceError::Invalid(msg),
            AppError::NotFound(msg) => AccountServiceError::NotFound(msg),
            AppError::Conflict(msg) => AccountServiceError::Conflict(msg),
            _ => AccountServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AccountServiceError> for AppError {
    fn from(err: AccountServiceError) -> Self {
        match err {
            AccountServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AccountServiceError::NotFound(msg) => AppError::NotFound(msg),
            AccountServiceError::Conflict(msg) => AppError::Conflict(msg),
            AccountServiceError::Dependency(msg) => AppError::Internal(msg),
            AccountServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
