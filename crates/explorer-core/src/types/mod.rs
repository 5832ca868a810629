//! Core type definitions used across the Explorer workspace.

pub mod sorting;

pub use sorting::{SortBy, SortDirection, SortKey};
