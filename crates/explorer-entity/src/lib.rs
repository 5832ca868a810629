//! # explorer-entity
//!
//! Domain entity models for Explorer. [`Item`] represents a row of the
//! single `file_system_items` table; the other types are value objects
//! used to create and change rows.

pub mod item;

pub use item::{CreateItem, Item, ItemChanges, PathRewrite};
