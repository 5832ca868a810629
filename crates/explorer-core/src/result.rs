//! Convenience result type alias for Explorer.

use crate::error::AppError;

/// A specialized `Result` type for Explorer operations.
pub type AppResult<T> = Result<T, AppError>;
