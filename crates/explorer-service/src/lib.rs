//! # explorer-service
//!
//! Business logic for the item tree. [`ItemService`] validates requests,
//! enforces that only an item's creator may change it, maintains
//! materialized paths, and delegates persistence to an
//! [`ItemStore`](explorer_database::ItemStore).
//!
//! Services follow constructor injection: the store is provided at
//! construction time via `Arc`.

pub mod context;
pub mod item;

pub use context::Actor;
pub use item::{CreateItemRequest, InitOutcome, ItemService, UpdateItemRequest};
