//! # explorer-core
//!
//! Core crate for Explorer. Contains configuration schemas, the sort
//! vocabulary shared by the store and the UI state, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Explorer crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
