//! Flash messages kept in the session between a mutation and the next view.

use serde::Serialize;
use tower_sessions::Session;
use tracing::warn;

use super::{ApiError, Flash, View};

const FLASH_KEY: &str = "flashes";

pub async fn push(session: &Session, flash: Flash) -> Result<(), ApiError> {
    let mut pending: Vec<Flash> = session.get(FLASH_KEY).await?.unwrap_or_default();
    pending.push(flash);
    session.insert(FLASH_KEY, pending).await?;
    Ok(())
}

/// Drains every pending flash.
pub async fn take(session: &Session) -> Result<Vec<Flash>, ApiError> {
    Ok(session
        .remove::<Vec<Flash>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}

/// Builds a view carrying whatever flashes are pending.
pub async fn render<T: Serialize>(
    session: &Session,
    view: &'static str,
    data: T,
) -> Result<View<T>, ApiError> {
    let flashes = take(session).await?;
    Ok(View::new(view, flashes, data))
}

/// Records an error flash for a failed mutation and hands back the error.
pub async fn fail(session: &Session, message: String, err: impl Into<ApiError>) -> ApiError {
    if let Err(e) = push(session, Flash::error(message)).await {
        warn!("Failed to store error flash: {}", e);
    }
    err.into()
}
