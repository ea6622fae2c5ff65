use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::account::{AccountView, ExistsResponse, RegisterAccountRequest};
use crate::{
    domain::account::AccountService,
    error::{AppError, AppResult},
};

pub struct AccountController {
    account_service: Arc<AccountService>,
}

impl AccountController {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }

    /// POST /api/accounts - Register a new account
    pub async fn register(
        State(controller): State<Arc<AccountController>>,
        Json(request): Json<RegisterAccountRequest>,
    ) -> AppResult<(StatusCode, Json<AccountView>)> {
        let account = controller.account_service.register(request).await?;
        Ok((StatusCode::CREATED, Json(account)))
    }

    /// GET /api/accounts/{username}
    pub async fn get_account(
        State(controller): State<Arc<AccountController>>,
        Path(username): Path<String>,
    ) -> AppResult<Json<AccountView>> {
        let account = controller
            .account_service
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;
        Ok(Json(account))
    }

    /// GET /api/accounts/{username}/exists
    pub async fn account_exists(
        State(controller): State<Arc<AccountController>>,
        Path(username): Path<String>,
    ) -> AppResult<Json<ExistsResponse>> {
        let exists = controller
            .account_service
            .exists_by_username(&username)
            .await?;
        Ok(Json(ExistsResponse { exists }))
    }
}
