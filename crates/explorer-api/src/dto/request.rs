//! Request DTOs with validation.
//!
//! Field names follow the JSON the browser client sends (camelCase).

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use explorer_service::{CreateItemRequest as SvcCreateItem, UpdateItemRequest as SvcUpdateItem};

/// POST /api/items body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub is_folder: bool,
    pub file_key: Option<String>,
    pub parent_folder_id: Option<Uuid>,
    #[serde(default)]
    #[validate(length(min = 1, message = "createdBy is required"))]
    pub created_by: String,
    pub path: Option<String>,
}

impl From<CreateItemRequest> for SvcCreateItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            is_folder: req.is_folder,
            file_key: req.file_key,
            parent_folder_id: req.parent_folder_id,
            created_by: req.created_by,
            path: req.path,
        }
    }
}

/// PATCH /api/items/{id} body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// New name; older clients send it as `newname`.
    #[serde(alias = "newname")]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "updatedBy is required"))]
    pub updated_by: String,
    pub new_parent_folder_id: Option<Uuid>,
    pub new_path: Option<String>,
}

impl From<UpdateItemRequest> for SvcUpdateItem {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            updated_by: req.updated_by,
            new_parent_folder_id: req.new_parent_folder_id,
            new_path: req.new_path,
        }
    }
}

/// DELETE /api/items/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemRequest {
    pub deleted_by: Option<String>,
}

/// GET /api/items query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsParams {
    /// Folder to list; absent, empty or `null` means the root.
    pub folder_id: Option<String>,
    /// One of `created_asc`, `created_desc`, `name_asc`, `name_desc`.
    pub sort_by: Option<String>,
}
