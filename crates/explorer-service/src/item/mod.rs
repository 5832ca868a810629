//! Item management.

pub mod request;
pub mod service;

pub use request::{CreateItemRequest, UpdateItemRequest};
pub use service::{InitOutcome, ItemService};
