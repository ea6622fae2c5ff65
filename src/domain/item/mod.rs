pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{ItemRequest, ItemView, PagedItemView};
pub use error::ItemServiceError;
pub use model::Item;
pub use service::{ItemService, ItemServiceApi};
