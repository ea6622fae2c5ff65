pub mod account;
pub mod health;
pub mod item;
pub mod review;
