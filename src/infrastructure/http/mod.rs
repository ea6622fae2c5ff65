use axum::{
    extract::Request,
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::controllers::{
    account::AccountController, health, item::ItemController, review::ReviewController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::middleware::{request_id_middleware, RequestId};

/// Build the application router over the given controllers.
/// `pool` is `None` when the in-memory stores are in use.
pub fn build_router(
    pool: Option<Arc<DbPool>>,
    item_controller: Arc<ItemController>,
    review_controller: Arc<ReviewController>,
    account_controller: Arc<AccountController>,
) -> Router {
    let item_routes = Router::new()
        .route(
            "/api/items",
            get(ItemController::list_items).post(ItemController::create_item),
        )
        .route(
            "/api/items/:itemId",
            get(ItemController::get_item)
                .put(ItemController::update_item)
                .delete(ItemController::delete_item),
        )
        .route("/api/item-types/:itemType", get(ItemController::get_item_by_type))
        .with_state(item_controller);

    let review_routes = Router::new()
        .route(
            "/api/items/:itemId/reviews",
            get(ReviewController::list_item_reviews).post(ReviewController::create_review),
        )
        .route(
            "/api/items/:itemId/reviews/:reviewId",
            put(ReviewController::update_review).delete(ReviewController::delete_review),
        )
        .route("/api/reviews", get(ReviewController::list_reviews))
        .with_state(review_controller);

    let account_routes = Router::new()
        .route("/api/accounts", post(AccountController::register))
        .route("/api/accounts/:username", get(AccountController::get_account))
        .route(
            "/api/accounts/:username/exists",
            get(AccountController::account_exists),
        )
        .with_state(account_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(item_routes)
        .merge(review_routes)
        .merge(account_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(request_span)),
        )
}

fn request_span(request: &Request) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Bind to the configured address and serve `app` until shutdown
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
