use axum::Router;
use review_backend::{
    controllers::{account::AccountController, item::ItemController, review::ReviewController},
    domain::{account::AccountService, item::ItemService, review::ReviewService},
    infrastructure::{
        http::build_router,
        repositories::{
            InMemoryAccountRepository, InMemoryItemRepository, InMemoryReviewRepository,
        },
    },
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod fixtures;

use api_client::TestClient;
use fixtures::TestFixtures;

/// Page size the test app falls back to when a list request sends none
pub const TEST_DEFAULT_PAGE_SIZE: u32 = 10;

pub struct TestContext {
    pub client: TestClient,
    pub fixtures: TestFixtures,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let fixtures = TestFixtures {
                items: Arc::new(InMemoryItemRepository::new()),
                reviews: Arc::new(InMemoryReviewRepository::new()),
                accounts: Arc::new(InMemoryAccountRepository::new()),
            };

            let app = create_app(&fixtures);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                fixtures,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Stores are dropped with the context
        }
    }
}

fn create_app(fixtures: &TestFixtures) -> Router {
    let item_service = Arc::new(ItemService::new(
        fixtures.items.clone(),
        fixtures.reviews.clone(),
    ));
    let review_service = Arc::new(ReviewService::new(
        fixtures.reviews.clone(),
        fixtures.items.clone(),
    ));
    let account_service = Arc::new(AccountService::new(fixtures.accounts.clone()));

    build_router(
        None,
        Arc::new(ItemController::new(item_service, TEST_DEFAULT_PAGE_SIZE)),
        Arc::new(ReviewController::new(review_service)),
        Arc::new(AccountController::new(account_service)),
    )
}
