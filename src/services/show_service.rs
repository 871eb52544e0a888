//! Domain service for shows: the global listing and booking new shows.

use crate::domain::Timing;
use crate::models::show::{Show, ShowInput};
use crate::services::DirectoryError;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the shows page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
    pub timing: Timing,
}

#[async_trait::async_trait]
pub trait ShowService: Send + Sync {
    /// Every show ordered by start time, each tagged past or upcoming
    /// relative to `now`.
    async fn list(&self, now: NaiveDateTime) -> Result<Vec<ShowListing>, DirectoryError>;

    /// Books a show.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if the venue or artist does
    /// not exist.
    async fn create(&self, input: ShowInput) -> Result<Show, DirectoryError>;
}
