//! Service-level request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a file or folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Display name.
    pub name: String,
    /// Folder or file.
    pub is_folder: bool,
    /// File type tag; dropped for folders.
    pub file_key: Option<String>,
    /// Parent folder; `None` places the item directly under the root.
    pub parent_folder_id: Option<Uuid>,
    /// Creator identity.
    pub created_by: String,
    /// Pre-computed path. Derived from the parent when absent.
    pub path: Option<String>,
}

/// Request to rename and/or move an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// New display name.
    pub name: Option<String>,
    /// Acting identity; must equal the item's creator.
    pub updated_by: String,
    /// Destination folder. Must be given together with `new_path`.
    pub new_parent_folder_id: Option<Uuid>,
    /// Path at the destination. Must be given together with
    /// `new_parent_folder_id`.
    pub new_path: Option<String>,
}
