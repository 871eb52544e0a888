//! Domain service for artists.

use crate::models::artist::{Artist, ArtistInput};
use crate::services::DirectoryError;
use crate::services::schedule::{Schedule, VenueAppearance};
use crate::services::search::SearchResults;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistListing {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub schedule: Schedule<VenueAppearance>,
}

impl ArtistDetail {
    #[must_use]
    pub fn new(artist: Artist, schedule: Schedule<VenueAppearance>) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.looking_for_venues,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            schedule,
        }
    }
}

/// Domain service trait for artist operations.
///
/// Artists have no delete operation.
#[async_trait::async_trait]
pub trait ArtistService: Send + Sync {
    async fn list(&self) -> Result<Vec<ArtistListing>, DirectoryError>;

    /// Case-insensitive substring search on artist name.
    async fn search(
        &self,
        term: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResults<ArtistSummary>, DirectoryError>;

    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no artist has this id.
    async fn get(&self, id: i32) -> Result<Artist, DirectoryError>;

    async fn detail(&self, id: i32, now: NaiveDateTime) -> Result<ArtistDetail, DirectoryError>;

    async fn create(&self, input: ArtistInput) -> Result<Artist, DirectoryError>;

    async fn update(&self, id: i32, input: ArtistInput) -> Result<Artist, DirectoryError>;
}
