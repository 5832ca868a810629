//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use explorer_core::config::AppConfig;
use explorer_service::ItemService;

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Item tree service
    pub item_service: Arc<ItemService>,
}

impl AppState {
    pub fn new(config: AppConfig, item_service: ItemService) -> Self {
        Self {
            config: Arc::new(config),
            item_service: Arc::new(item_service),
        }
    }
}
