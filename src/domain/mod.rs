pub mod account;
pub mod item;
pub mod review;
pub mod shared;
