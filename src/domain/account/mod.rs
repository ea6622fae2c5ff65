pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{AccountView, ExistsResponse, RegisterAccountRequest};
pub use error::AccountServiceError;
pub use model::Account;
pub use service::AccountService;
