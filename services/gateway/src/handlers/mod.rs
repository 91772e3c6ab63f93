pub mod catalog;
pub mod order;
pub mod seller;

use crate::error::AppError;

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}
