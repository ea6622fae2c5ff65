use super::error::{AccountServiceError, USERNAME_TAKEN};
use super::{Account, AccountView, RegisterAccountRequest};
use crate::infrastructure::repositories::AccountStore;
use std::sync::Arc;

pub struct AccountService {
    account_repo: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(account_repo: Arc<dyn AccountStore>) -> Self {
        Self { account_repo }
    }

    /// Look up an account by exact username. A miss is not an error.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountView>, AccountServiceError> {
        let account = self.account_repo.find_by_username(username).await?;
        Ok(account.map(AccountView::from))
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, AccountServiceError> {
        Ok(self.account_repo.exists_by_username(username).await?)
    }

    /// Create an account, refusing usernames already in the store
    pub async fn register(
        &self,
        request: RegisterAccountRequest,
    ) -> Result<AccountView, AccountServiceError> {
        request.validate().map_err(AccountServiceError::Invalid)?;

        if self.account_repo.exists_by_username(&request.username).await? {
            return Err(AccountServiceError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let saved = self
            .account_repo
            .save(Account::new(request.username, request.password))
            .await?;
        tracing::info!(account_id = saved.id, "Account registered");

        Ok(AccountView::from(saved))
    }
}
