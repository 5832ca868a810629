//! Schema bootstrap handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::InitResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/init
pub async fn initialize(State(state): State<AppState>) -> Result<Json<InitResponse>, ApiError> {
    let outcome = state.item_service.initialize().await?;
    Ok(Json(InitResponse {
        success: true,
        message: outcome.message,
    }))
}
