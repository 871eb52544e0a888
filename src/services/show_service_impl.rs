//! `SeaORM` implementation of the `ShowService` trait.

use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::db::Store;
use crate::domain::Timing;
use crate::models::show::{Show, ShowInput};
use crate::services::show_service::ShowListing;
use crate::services::{DirectoryError, ShowService};

pub struct SeaOrmShowService {
    store: Store,
}

impl SeaOrmShowService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ShowService for SeaOrmShowService {
    async fn list(&self, now: NaiveDateTime) -> Result<Vec<ShowListing>, DirectoryError> {
        let shows = self.store.list_shows().await?;

        let venue_ids: Vec<i32> = shows
            .iter()
            .map(|s| s.venue_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let artist_ids: Vec<i32> = shows
            .iter()
            .map(|s| s.artist_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let venues: HashMap<i32, _> = self
            .store
            .get_venues_by_ids(&venue_ids)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();
        let artists: HashMap<i32, _> = self
            .store
            .get_artists_by_ids(&artist_ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let listings = shows
            .into_iter()
            .filter_map(|show| {
                let (Some(venue), Some(artist)) =
                    (venues.get(&show.venue_id), artists.get(&show.artist_id))
                else {
                    warn!("Show {} references a missing venue or artist", show.id);
                    return None;
                };

                Some(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                    timing: Timing::of(show.start_time, now),
                })
            })
            .collect();

        Ok(listings)
    }

    async fn create(&self, input: ShowInput) -> Result<Show, DirectoryError> {
        if self.store.get_venue(input.venue_id).await?.is_none() {
            return Err(DirectoryError::validation(format!(
                "Venue {} does not exist",
                input.venue_id
            )));
        }

        if self.store.get_artist(input.artist_id).await?.is_none() {
            return Err(DirectoryError::validation(format!(
                "Artist {} does not exist",
                input.artist_id
            )));
        }

        Ok(self.store.add_show(&input).await?)
    }
}
