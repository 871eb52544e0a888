use axum::http::Uri;
use tower_sessions::Session;

use super::{ApiError, View, flash};

/// `GET /`
pub async fn index(session: Session) -> Result<View<()>, ApiError> {
    flash::render(&session, "pages/home", ()).await
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No page at {}", uri.path()))
}
