pub mod entity;
pub mod page;

pub use entity::{Entity, UNSAVED_ID};
pub use page::{Page, PageRequest, PagedResponse};
