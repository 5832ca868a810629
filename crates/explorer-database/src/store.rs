//! The storage seam between the item service and a backend.

use async_trait::async_trait;
use uuid::Uuid;

use explorer_core::result::AppResult;
use explorer_core::types::SortBy;
use explorer_entity::item::{CreateItem, Item, ItemChanges};

/// Backend holding the single self-referencing item table.
///
/// Implementations must keep `path` unique (violations are
/// `ErrorKind::Conflict`), reject unknown parents (`ErrorKind::NotFound`)
/// and remove every descendant when a folder is deleted.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Create the table, its indexes and the root row unless the table
    /// already exists. Returns `true` when something was created.
    async fn initialize(&self, root_name: &str, system_identity: &str) -> AppResult<bool>;

    /// Direct children of `parent` (`None` lists the top level), folders
    /// first, then by `sort`.
    async fn list_children(&self, parent: Option<Uuid>, sort: SortBy) -> AppResult<Vec<Item>>;

    /// Find an item by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>>;

    /// IDs of every ancestor of `id`, nearest first.
    async fn find_ancestor_ids(&self, id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Insert a new item; `created_by` is also recorded as `updated_by`.
    async fn insert(&self, data: &CreateItem) -> AppResult<Item>;

    /// Apply `changes` and refresh `updated_by`/`updated_at`. Returns `None`
    /// if the item does not exist.
    async fn update(&self, id: Uuid, changes: &ItemChanges) -> AppResult<Option<Item>>;

    /// Delete an item and all of its descendants. Returns `true` if the item
    /// existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
