//! Typed path parameter helpers.

use uuid::Uuid;

use explorer_core::error::AppError;

/// Parses an item id from a path segment.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid item id: {s}")))
}
