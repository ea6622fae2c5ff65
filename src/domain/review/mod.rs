pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{ReviewRequest, ReviewView};
pub use error::ReviewServiceError;
pub use model::Review;
pub use service::{ReviewService, ReviewServiceApi};
