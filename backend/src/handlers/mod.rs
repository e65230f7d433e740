pub mod password_reset;

use crate::error::AppError;
use axum::http::Uri;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
