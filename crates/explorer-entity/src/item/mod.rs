//! File and folder rows of the adjacency-list tree.

pub mod model;
pub mod path;

pub use model::{CreateItem, Item, ItemChanges, PathRewrite};
