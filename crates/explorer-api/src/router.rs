//! Route definitions for the Explorer HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the `/api` router with request logging, without outer layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(item_routes())
        .merge(system_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Item listing and CRUD
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::item::list_items).post(handlers::item::create_item),
        )
        .route(
            "/items/{id}",
            patch(handlers::item::update_item).delete(handlers::item::delete_item),
        )
}

/// Bootstrap and health
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/init", get(handlers::init::initialize))
        .route("/health", get(handlers::health::health))
}
