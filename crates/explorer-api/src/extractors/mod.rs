//! Custom Axum extractors.
//!
//! Both extractors turn framework rejections into validation errors so
//! malformed input answers 400 with the usual error body.

pub mod json;
pub mod path;
pub mod query;

pub use json::ValidatedJson;
pub use query::ApiQuery;
