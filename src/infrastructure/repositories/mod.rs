pub mod account_repository;
pub mod entity_store;
pub mod in_memory;
pub mod item_repository;
pub mod review_repository;

pub use account_repository::AccountRepository;
pub use entity_store::{AccountStore, EntityStore, ItemStore, ReviewStore};
pub use in_memory::{
    InMemoryAccountRepository, InMemoryItemRepository, InMemoryReviewRepository, InMemoryStore,
    StoredRecord,
};
pub use item_repository::ItemRepository;
pub use review_repository::ReviewRepository;
