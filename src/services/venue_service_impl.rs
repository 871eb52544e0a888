//! `SeaORM` implementation of the `VenueService` trait.

use chrono::NaiveDateTime;

use crate::db::Store;
use crate::models::venue::{Venue, VenueInput};
use crate::services::schedule::venue_schedule;
use crate::services::search::{SearchResults, normalize_term};
use crate::services::venue_service::{VenueArea, VenueDetail, VenueSummary, group_by_area};
use crate::services::{DirectoryError, VenueService};

pub struct SeaOrmVenueService {
    store: Store,
}

impl SeaOrmVenueService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl VenueService for SeaOrmVenueService {
    async fn list_areas(&self, now: NaiveDateTime) -> Result<Vec<VenueArea>, DirectoryError> {
        let venues = self.store.list_venues().await?;
        let ids: Vec<i32> = venues.iter().map(|v| v.id).collect();

        // One grouped count query instead of one per venue
        let upcoming = self.store.upcoming_counts_by_venue(&ids, now).await?;

        Ok(group_by_area(venues, &upcoming))
    }

    async fn search(
        &self,
        term: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResults<VenueSummary>, DirectoryError> {
        let venues = self.store.search_venues(normalize_term(term)).await?;
        let ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
        let upcoming = self.store.upcoming_counts_by_venue(&ids, now).await?;

        let data = venues
            .into_iter()
            .map(|v| VenueSummary {
                num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.name,
            })
            .collect();

        Ok(SearchResults::new(data))
    }

    async fn get(&self, id: i32) -> Result<Venue, DirectoryError> {
        self.store
            .get_venue(id)
            .await?
            .ok_or(DirectoryError::venue_not_found(id))
    }

    async fn detail(&self, id: i32, now: NaiveDateTime) -> Result<VenueDetail, DirectoryError> {
        let venue = self.get(id).await?;
        let schedule = venue_schedule(&self.store, id, now).await?;
        Ok(VenueDetail::new(venue, schedule))
    }

    async fn create(&self, input: VenueInput) -> Result<Venue, DirectoryError> {
        Ok(self.store.add_venue(&input).await?)
    }

    async fn update(&self, id: i32, input: VenueInput) -> Result<Venue, DirectoryError> {
        self.store
            .update_venue(id, &input)
            .await?
            .ok_or(DirectoryError::venue_not_found(id))
    }

    async fn delete(&self, id: i32) -> Result<Venue, DirectoryError> {
        self.store
            .remove_venue(id)
            .await?
            .ok_or(DirectoryError::venue_not_found(id))
    }
}
