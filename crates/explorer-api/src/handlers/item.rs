//! Item CRUD handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::types::SortBy;

use crate::dto::request::{CreateItemRequest, DeleteItemRequest, ListItemsParams, UpdateItemRequest};
use crate::dto::response::{ItemResponse, ItemsResponse, SuccessResponse};
use crate::error::ApiError;
use crate::extractors::path::parse_uuid;
use crate::extractors::{ApiQuery, ValidatedJson};
use crate::state::AppState;

/// GET /api/items?folderId=...&sortBy=...
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListItemsParams>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let folder_id = match params.folder_id.as_deref().map(str::trim) {
        None | Some("") | Some("null") => None,
        Some(raw) => Some(
            raw.parse::<Uuid>()
                .map_err(|_| AppError::validation(format!("Invalid folderId: {raw}")))?,
        ),
    };
    let sort = match params.sort_by.as_deref() {
        None | Some("") => SortBy::default(),
        Some(raw) => raw.parse()?,
    };

    let items = state.item_service.list_children(folder_id, sort).await?;
    Ok(Json(ItemsResponse {
        success: true,
        items,
    }))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.item_service.create_item(req.into()).await?;
    Ok(Json(ItemResponse {
        success: true,
        item,
    }))
}

/// PATCH /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    let item = state.item_service.update_item(id, req.into()).await?;
    Ok(Json(ItemResponse {
        success: true,
        item,
    }))
}

/// DELETE /api/items/{id}
///
/// The body `{"deletedBy": ...}` is optional at the HTTP level so that a
/// missing identity yields the service's own validation message.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    let req: DeleteItemRequest = if body.iter().all(u8::is_ascii_whitespace) {
        DeleteItemRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?
    };

    state
        .item_service
        .delete_item(id, req.deleted_by.as_deref())
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
