//! # explorer-database
//!
//! Persistence for the item tree: the [`ItemStore`] trait, its PostgreSQL
//! implementation ([`ItemRepository`]), a process-local arena
//! ([`MemoryItemStore`]) and connection management.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod schema;
pub mod store;

use std::sync::Arc;

use explorer_core::config::{DatabaseConfig, StoreBackend};
use explorer_core::result::AppResult;

pub use connection::DatabasePool;
pub use memory::MemoryItemStore;
pub use repositories::ItemRepository;
pub use store::ItemStore;

/// Build the store selected by `config.backend`.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn ItemStore>> {
    match config.backend {
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            Ok(Arc::new(ItemRepository::new(pool.into_pool())))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store; data is lost on exit");
            Ok(Arc::new(MemoryItemStore::new()))
        }
    }
}
