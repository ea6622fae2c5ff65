use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use review_backend::controllers::{
    account::AccountController, item::ItemController, review::ReviewController,
};
use review_backend::domain::{account::AccountService, item::ItemService, review::ReviewService};
use review_backend::infrastructure::config::{Config, LogFormat};
use review_backend::infrastructure::db::{check_connection, create_pool, run_migrations, DbPool};
use review_backend::infrastructure::http::{build_router, start_http_server};
use review_backend::infrastructure::repositories::{
    AccountRepository, AccountStore, InMemoryAccountRepository, InMemoryItemRepository,
    InMemoryReviewRepository, ItemRepository, ItemStore, ReviewRepository, ReviewStore,
};

struct Stores {
    pool: Option<Arc<DbPool>>,
    items: Arc<dyn ItemStore>,
    reviews: Arc<dyn ReviewStore>,
    accounts: Arc<dyn AccountStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Review Backend on {}:{}",
        config.host,
        config.port
    );

    // 1. Instantiate repositories
    let stores = init_stores(&config).await?;
    let config = Arc::new(config);

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let item_service = Arc::new(ItemService::new(
        stores.items.clone(),
        stores.reviews.clone(),
    ));
    let review_service = Arc::new(ReviewService::new(
        stores.reviews.clone(),
        stores.items.clone(),
    ));
    let account_service = Arc::new(AccountService::new(stores.accounts.clone()));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let item_controller = Arc::new(ItemController::new(item_service, config.default_page_size));
    let review_controller = Arc::new(ReviewController::new(review_service));
    let account_controller = Arc::new(AccountController::new(account_service));

    let mut app = build_router(stores.pool, item_controller, review_controller, account_controller);
    if config.is_development() {
        app = app.layer(CorsLayer::permissive());
    }
    start_http_server(config, app).await?;

    Ok(())
}

async fn init_stores(config: &Config) -> Result<Stores, Box<dyn std::error::Error>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; records are kept in memory and lost on exit");
        return Ok(Stores {
            pool: None,
            items: Arc::new(InMemoryItemRepository::new()),
            reviews: Arc::new(InMemoryReviewRepository::new()),
            accounts: Arc::new(InMemoryAccountRepository::new()),
        });
    };

    let pool = create_pool(database_url, config.db_max_connections).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    Ok(Stores {
        pool: Some(pool.clone()),
        items: Arc::new(ItemRepository::new(pool.clone())),
        reviews: Arc::new(ReviewRepository::new(pool.clone())),
        accounts: Arc::new(AccountRepository::new(pool)),
    })
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "review_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
