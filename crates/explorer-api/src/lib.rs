//! # explorer-api
//!
//! HTTP API layer for Explorer built on Axum.
//!
//! Provides the `/api` endpoints, middleware (CORS, request logging,
//! compression), extractors, DTOs, and the mapping from
//! [`AppError`](explorer_core::AppError) to JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
