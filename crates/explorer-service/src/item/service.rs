//! Item CRUD with creator-only mutation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use explorer_core::config::ExplorerConfig;
use explorer_core::error::AppError;
use explorer_core::types::SortBy;
use explorer_database::store::ItemStore;
use explorer_entity::item::path::{SEPARATOR, child_path, is_valid_segment, renamed_path};
use explorer_entity::item::{CreateItem, Item, ItemChanges, PathRewrite};

use super::request::{CreateItemRequest, UpdateItemRequest};
use crate::context::Actor;

/// Result of [`ItemService::initialize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitOutcome {
    /// Whether the table and root row were created by this call.
    pub created: bool,
    /// Human-readable summary.
    pub message: String,
}

/// Manages the item tree.
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    config: ExplorerConfig,
}

impl std::fmt::Debug for ItemService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(store: Arc<dyn ItemStore>, config: ExplorerConfig) -> Self {
        Self { store, config }
    }

    /// Tree settings in use.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Idempotent schema bootstrap.
    pub async fn initialize(&self) -> Result<InitOutcome, AppError> {
        let created = self
            .store
            .initialize(&self.config.root_name, &self.config.system_identity)
            .await?;

        if created {
            info!(root = %self.config.root_path(), "Item store initialized");
        } else {
            debug!("Item store already initialized");
        }

        Ok(InitOutcome {
            created,
            message: "Database initialized".to_string(),
        })
    }

    /// The single parentless folder.
    pub async fn root(&self) -> Result<Item, AppError> {
        self.store
            .list_children(None, SortBy::default())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("Root folder not found; initialize the store first"))
    }

    /// Gets an item by ID.
    pub async fn get_item(&self, id: Uuid) -> Result<Item, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// Lists the children of a folder, folders first. `None` lists the
    /// children of the root.
    pub async fn list_children(
        &self,
        folder_id: Option<Uuid>,
        sort: SortBy,
    ) -> Result<Vec<Item>, AppError> {
        let parent = match folder_id {
            Some(id) => id,
            None => self.root().await?.id,
        };
        self.store.list_children(Some(parent), sort).await
    }

    /// Creates a new file or folder.
    pub async fn create_item(&self, req: CreateItemRequest) -> Result<Item, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name is required"));
        }
        check_segment(name)?;
        let creator = Actor::parse(Some(&req.created_by), "createdBy")?;

        let parent_id = match req.parent_folder_id {
            Some(id) => id,
            None => self.root().await?.id,
        };

        let path = match req.path.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => {
                let parent = self
                    .store
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
                child_path(&parent.path, name, req.is_folder)
            }
        };

        let file_key = if req.is_folder {
            None
        } else {
            req.file_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        };

        let item = self
            .store
            .insert(&CreateItem {
                name: name.to_string(),
                is_folder: req.is_folder,
                file_key,
                parent_folder_id: Some(parent_id),
                created_by: creator.as_str().to_string(),
                path,
            })
            .await?;

        info!(
            actor = %creator,
            item_id = %item.id,
            path = %item.path,
            is_folder = item.is_folder,
            "Item created"
        );

        Ok(item)
    }

    /// Renames and/or moves an item. Only the creator may do so.
    pub async fn update_item(&self, id: Uuid, req: UpdateItemRequest) -> Result<Item, AppError> {
        let actor = Actor::parse(Some(&req.updated_by), "updatedBy")?;
        let item = self.get_item(id).await?;
        self.require_creator(&item, &actor, "update")?;

        let new_name = match req.name.as_deref().map(str::trim) {
            Some("") => return Err(AppError::validation("name cannot be empty")),
            Some(name) => {
                check_segment(name)?;
                Some(name.to_string())
            }
            None => None,
        };

        let relocation = match (req.new_parent_folder_id, req.new_path) {
            (Some(parent), Some(path)) if !path.trim().is_empty() => {
                Some((parent, path.trim().to_string()))
            }
            (None, None) => None,
            _ => {
                return Err(AppError::validation(
                    "newParentFolderId and newPath must be supplied together",
                ));
            }
        };

        if new_name.is_none() && relocation.is_none() {
            return Err(AppError::validation("No fields to update"));
        }

        let new_path = match (&relocation, &new_name) {
            (Some((target_id, path)), _) => {
                self.check_move_target(&item, *target_id).await?;
                Some(normalize_path(path, item.is_folder))
            }
            (None, Some(name)) => Some(renamed_path(&item.path, name, item.is_folder)),
            (None, None) => None,
        };

        let descendants = new_path
            .as_ref()
            .filter(|p| item.is_folder && **p != item.path)
            .map(|p| PathRewrite {
                from: item.path.clone(),
                to: p.clone(),
            });

        let changes = ItemChanges {
            name: new_name,
            parent_folder_id: relocation.as_ref().map(|(parent, _)| *parent),
            path: new_path,
            updated_by: actor.as_str().to_string(),
            descendants,
        };

        let updated = self
            .store
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        info!(
            actor = %actor,
            item_id = %id,
            old_path = %item.path,
            new_path = %updated.path,
            "Item updated"
        );

        Ok(updated)
    }

    /// Deletes an item and, for folders, everything below it. Only the
    /// creator may do so.
    pub async fn delete_item(&self, id: Uuid, deleted_by: Option<&str>) -> Result<(), AppError> {
        let actor = Actor::parse(deleted_by, "deletedBy")?;
        let item = self.get_item(id).await?;
        self.require_creator(&item, &actor, "delete")?;

        if !self.store.delete(id).await? {
            return Err(AppError::not_found("Item not found"));
        }

        info!(actor = %actor, item_id = %id, path = %item.path, "Item deleted");
        Ok(())
    }

    fn require_creator(&self, item: &Item, actor: &Actor, action: &str) -> Result<(), AppError> {
        if item.is_root() {
            return Err(AppError::authorization(format!(
                "Unauthorized: the root folder cannot be {action}d"
            )));
        }
        if !item.is_created_by(actor.as_str()) {
            return Err(AppError::authorization(format!(
                "Unauthorized: Only the creator can {action} this item"
            )));
        }
        Ok(())
    }

    async fn check_move_target(&self, item: &Item, target_id: Uuid) -> Result<(), AppError> {
        let target = self
            .store
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::not_found("Target folder not found"))?;

        if !target.is_folder {
            return Err(AppError::validation("Target is not a folder"));
        }

        if target.id == item.id
            || self
                .store
                .find_ancestor_ids(target.id)
                .await?
                .contains(&item.id)
        {
            return Err(AppError::validation(
                "Cannot move a folder into itself or one of its descendants",
            ));
        }

        Ok(())
    }
}

fn check_segment(name: &str) -> Result<(), AppError> {
    if is_valid_segment(name) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "name cannot contain '{SEPARATOR}'"
        )))
    }
}

/// Folder paths always carry a trailing slash so descendant rewrites stay
/// anchored at a segment boundary.
fn normalize_path(path: &str, is_folder: bool) -> String {
    if is_folder && !path.ends_with('/') {
        format!("{path}/")
    } else {
        path.to_string()
    }
}
