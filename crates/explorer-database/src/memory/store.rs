//! In-memory item store: an arena of rows addressed by id plus a
//! parent-id index.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::SortBy;
use explorer_entity::item::{CreateItem, Item, ItemChanges};

use crate::store::ItemStore;

#[derive(Debug, Default)]
struct Arena {
    /// `false` until [`ItemStore::initialize`] ran, mirroring a missing table.
    initialized: bool,
    items: HashMap<Uuid, Item>,
    children: HashMap<Option<Uuid>, Vec<Uuid>>,
    paths: HashMap<String, Uuid>,
}

impl Arena {
    fn ensure_initialized(&self) -> AppResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(AppError::database(
                "relation \"file_system_items\" does not exist",
            ))
        }
    }

    fn link(&mut self, item: Item) {
        self.children
            .entry(item.parent_folder_id)
            .or_default()
            .push(item.id);
        self.paths.insert(item.path.clone(), item.id);
        self.items.insert(item.id, item);
    }

    fn unlink_child(&mut self, parent: Option<Uuid>, id: Uuid) {
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|c| *c != id);
            if siblings.is_empty() {
                self.children.remove(&parent);
            }
        }
    }

    /// `id` followed by every descendant, breadth-first.
    fn closure(&self, id: Uuid) -> Vec<Uuid> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(next) = queue.pop_front() {
            out.push(next);
            if let Some(kids) = self.children.get(&Some(next)) {
                queue.extend(kids.iter().copied());
            }
        }
        out
    }

    fn path_taken_by_other(&self, path: &str, ids: &[Uuid]) -> bool {
        self.paths
            .get(path)
            .is_some_and(|owner| !ids.contains(owner))
    }
}

/// Item store kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    arena: RwLock<Arena>,
}

impl MemoryItemStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows, root included.
    pub async fn len(&self) -> usize {
        self.arena.read().await.items.len()
    }

    /// Whether the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn initialize(&self, root_name: &str, system_identity: &str) -> AppResult<bool> {
        let mut arena = self.arena.write().await;
        if arena.initialized {
            return Ok(false);
        }

        let now = Utc::now();
        arena.link(Item {
            id: Uuid::new_v4(),
            path: format!("{root_name}/"),
            is_folder: true,
            file_key: None,
            parent_folder_id: None,
            name: root_name.to_string(),
            created_by: system_identity.to_string(),
            created_at: now,
            updated_by: system_identity.to_string(),
            updated_at: now,
        });
        arena.initialized = true;
        Ok(true)
    }

    async fn list_children(&self, parent: Option<Uuid>, sort: SortBy) -> AppResult<Vec<Item>> {
        let arena = self.arena.read().await;
        arena.ensure_initialized()?;

        let mut items: Vec<Item> = arena
            .children
            .get(&parent)
            .map(|ids| ids.iter().filter_map(|id| arena.items.get(id).cloned()).collect())
            .unwrap_or_default();
        items.sort_by(|a, b| a.listing_order(b, sort));
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        let arena = self.arena.read().await;
        arena.ensure_initialized()?;
        Ok(arena.items.get(&id).cloned())
    }

    async fn find_ancestor_ids(&self, id: Uuid) -> AppResult<Vec<Uuid>> {
        let arena = self.arena.read().await;
        arena.ensure_initialized()?;

        let mut ancestors = Vec::new();
        let mut cursor = arena.items.get(&id).and_then(|i| i.parent_folder_id);
        while let Some(parent_id) = cursor {
            if ancestors.contains(&parent_id) {
                break;
            }
            ancestors.push(parent_id);
            cursor = arena.items.get(&parent_id).and_then(|i| i.parent_folder_id);
        }
        Ok(ancestors)
    }

    async fn insert(&self, data: &CreateItem) -> AppResult<Item> {
        let mut arena = self.arena.write().await;
        arena.ensure_initialized()?;

        if arena.paths.contains_key(&data.path) {
            return Err(AppError::conflict(format!(
                "An item at path '{}' already exists",
                data.path
            )));
        }
        if let Some(parent_id) = data.parent_folder_id {
            if !arena.items.contains_key(&parent_id) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }

        let now = Utc::now();
        let item = Item {
            id: Uuid::new_v4(),
            path: data.path.clone(),
            is_folder: data.is_folder,
            file_key: data.file_key.clone(),
            parent_folder_id: data.parent_folder_id,
            name: data.name.clone(),
            created_by: data.created_by.clone(),
            created_at: now,
            updated_by: data.created_by.clone(),
            updated_at: now,
        };
        arena.link(item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, changes: &ItemChanges) -> AppResult<Option<Item>> {
        let mut arena = self.arena.write().await;
        arena.ensure_initialized()?;

        let Some(current) = arena.items.get(&id).cloned() else {
            return Ok(None);
        };

        if let Some(parent_id) = changes.parent_folder_id {
            if !arena.items.contains_key(&parent_id) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }

        // Compute every path change first so a conflict leaves the arena untouched.
        let mut renames: Vec<(Uuid, String, String)> = Vec::new();
        if let Some(path) = changes.path.as_ref().filter(|p| **p != current.path) {
            renames.push((id, current.path.clone(), path.clone()));
        }
        if let Some(rewrite) = &changes.descendants {
            for descendant in arena.closure(id).into_iter().skip(1) {
                if let Some(row) = arena.items.get(&descendant) {
                    if let Some(new_path) = rewrite.apply(&row.path) {
                        renames.push((descendant, row.path.clone(), new_path));
                    }
                }
            }
        }

        let moving: Vec<Uuid> = renames.iter().map(|(rid, _, _)| *rid).collect();
        if let Some((_, _, clash)) = renames
            .iter()
            .find(|(_, _, new_path)| arena.path_taken_by_other(new_path, &moving))
        {
            return Err(AppError::conflict(format!(
                "An item at path '{clash}' already exists"
            )));
        }

        for (_, old_path, _) in &renames {
            arena.paths.remove(old_path);
        }
        for (rid, _, new_path) in &renames {
            arena.paths.insert(new_path.clone(), *rid);
            if let Some(row) = arena.items.get_mut(rid) {
                row.path = new_path.clone();
            }
        }

        if let Some(parent_id) = changes.parent_folder_id {
            if current.parent_folder_id != Some(parent_id) {
                arena.unlink_child(current.parent_folder_id, id);
                arena.children.entry(Some(parent_id)).or_default().push(id);
            }
        }

        let Some(row) = arena.items.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(parent_id) = changes.parent_folder_id {
            row.parent_folder_id = Some(parent_id);
        }
        row.updated_by = changes.updated_by.clone();
        row.updated_at = Utc::now();

        if renames.len() > 1 {
            debug!(item_id = %id, rows = renames.len() - 1, "Descendant paths rewritten");
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut arena = self.arena.write().await;
        arena.ensure_initialized()?;

        let Some(parent) = arena.items.get(&id).map(|i| i.parent_folder_id) else {
            return Ok(false);
        };

        let doomed = arena.closure(id);
        arena.unlink_child(parent, id);
        for victim in &doomed {
            arena.children.remove(&Some(*victim));
            if let Some(row) = arena.items.remove(victim) {
                arena.paths.remove(&row.path);
            }
        }

        debug!(item_id = %id, removed = doomed.len(), "Item deleted with descendants");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_entity::item::PathRewrite;

    async fn bootstrapped() -> (MemoryItemStore, Item) {
        let store = MemoryItemStore::new();
        store.initialize("home", "system").await.unwrap();
        let root = store
            .list_children(None, SortBy::NameAsc)
            .await
            .unwrap()
            .remove(0);
        (store, root)
    }

    fn folder(name: &str, parent: &Item) -> CreateItem {
        CreateItem {
            name: name.to_string(),
            is_folder: true,
            file_key: None,
            parent_folder_id: Some(parent.id),
            created_by: "alice".to_string(),
            path: format!("{}{}/", parent.path, name),
        }
    }

    #[tokio::test]
    async fn test_requires_initialize() {
        let store = MemoryItemStore::new();
        let err = store.list_children(None, SortBy::NameAsc).await.unwrap_err();
        assert_eq!(err.kind, explorer_core::error::ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (store, root) = bootstrapped().await;
        assert!(!store.initialize("home", "system").await.unwrap());
        assert_eq!(store.len().await, 1);
        assert_eq!(root.path, "home/");
        assert_eq!(root.created_by, "system");
        assert!(root.is_root());
    }

    #[tokio::test]
    async fn test_duplicate_path_conflicts() {
        let (store, root) = bootstrapped().await;
        store.insert(&folder("Docs", &root)).await.unwrap();
        let err = store.insert(&folder("Docs", &root)).await.unwrap_err();
        assert_eq!(err.kind, explorer_core::error::ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_unknown_parent_rejected() {
        let (store, _) = bootstrapped().await;
        let data = CreateItem {
            name: "Orphan".to_string(),
            is_folder: true,
            file_key: None,
            parent_folder_id: Some(Uuid::new_v4()),
            created_by: "alice".to_string(),
            path: "home/Orphan/".to_string(),
        };
        let err = store.insert(&data).await.unwrap_err();
        assert_eq!(err.kind, explorer_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_descendants() {
        let (store, root) = bootstrapped().await;
        let a = store.insert(&folder("A", &root)).await.unwrap();
        let b = store.insert(&folder("B", &a)).await.unwrap();
        let c = store.insert(&folder("C", &b)).await.unwrap();

        assert!(store.delete(a.id).await.unwrap());

        assert!(store.find_by_id(b.id).await.unwrap().is_none());
        assert!(store.find_by_id(c.id).await.unwrap().is_none());
        assert_eq!(store.len().await, 1);
        // the freed path can be reused
        store.insert(&folder("A", &root)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_rewrites_descendant_paths() {
        let (store, root) = bootstrapped().await;
        let docs = store.insert(&folder("Docs", &root)).await.unwrap();
        let inner = store.insert(&folder("Inner", &docs)).await.unwrap();

        let changes = ItemChanges {
            name: Some("Documents".to_string()),
            parent_folder_id: None,
            path: Some("home/Documents/".to_string()),
            updated_by: "alice".to_string(),
            descendants: Some(PathRewrite {
                from: "home/Docs/".to_string(),
                to: "home/Documents/".to_string(),
            }),
        };
        let updated = store.update(docs.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.name, "Documents");

        let inner = store.find_by_id(inner.id).await.unwrap().unwrap();
        assert_eq!(inner.path, "home/Documents/Inner/");
    }

    #[tokio::test]
    async fn test_rewrite_skips_rows_outside_the_subtree() {
        let (store, root) = bootstrapped().await;
        let docs = store.insert(&folder("Docs", &root)).await.unwrap();
        let inner = store.insert(&folder("Inner", &docs)).await.unwrap();
        let stray = store
            .insert(&CreateItem {
                name: "stray".to_string(),
                is_folder: false,
                file_key: Some("course".to_string()),
                parent_folder_id: Some(root.id),
                created_by: "alice".to_string(),
                path: "home/Docs/stray".to_string(),
            })
            .await
            .unwrap();

        let changes = ItemChanges {
            name: Some("Documents".to_string()),
            parent_folder_id: None,
            path: Some("home/Documents/".to_string()),
            updated_by: "alice".to_string(),
            descendants: Some(PathRewrite {
                from: "home/Docs/".to_string(),
                to: "home/Documents/".to_string(),
            }),
        };
        store.update(docs.id, &changes).await.unwrap().unwrap();

        let inner = store.find_by_id(inner.id).await.unwrap().unwrap();
        assert_eq!(inner.path, "home/Documents/Inner/");
        let stray = store.find_by_id(stray.id).await.unwrap().unwrap();
        assert_eq!(stray.path, "home/Docs/stray");
    }

    #[tokio::test]
    async fn test_move_updates_parent_index() {
        let (store, root) = bootstrapped().await;
        let a = store.insert(&folder("A", &root)).await.unwrap();
        let b = store.insert(&folder("B", &root)).await.unwrap();

        let changes = ItemChanges {
            name: None,
            parent_folder_id: Some(a.id),
            path: Some("home/A/B/".to_string()),
            updated_by: "alice".to_string(),
            descendants: None,
        };
        store.update(b.id, &changes).await.unwrap().unwrap();

        let under_root = store.list_children(Some(root.id), SortBy::NameAsc).await.unwrap();
        assert_eq!(under_root.len(), 1);
        let under_a = store.list_children(Some(a.id), SortBy::NameAsc).await.unwrap();
        assert_eq!(under_a[0].id, b.id);
        assert_eq!(store.find_ancestor_ids(b.id).await.unwrap(), vec![a.id, root.id]);
    }
}
