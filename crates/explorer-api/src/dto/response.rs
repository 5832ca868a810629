//! Response DTOs. Every body carries a `success` flag.

use serde::{Deserialize, Serialize};

use explorer_entity::Item;

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Body of responses that carry nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// GET /api/init response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/items response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub success: bool,
    pub items: Vec<Item>,
}

/// Single item response of POST and PATCH.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub success: bool,
    pub item: Item,
}

/// GET /api/health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub version: String,
}
