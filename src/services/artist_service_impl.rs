//! `SeaORM` implementation of the `ArtistService` trait.

use chrono::NaiveDateTime;

use crate::db::Store;
use crate::models::artist::{Artist, ArtistInput};
use crate::services::artist_service::{ArtistDetail, ArtistListing, ArtistSummary};
use crate::services::schedule::artist_schedule;
use crate::services::search::{SearchResults, normalize_term};
use crate::services::{ArtistService, DirectoryError};

pub struct SeaOrmArtistService {
    store: Store,
}

impl SeaOrmArtistService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ArtistService for SeaOrmArtistService {
    async fn list(&self) -> Result<Vec<ArtistListing>, DirectoryError> {
        let artists = self.store.list_artists().await?;
        Ok(artists
            .into_iter()
            .map(|a| ArtistListing {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    async fn search(
        &self,
        term: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResults<ArtistSummary>, DirectoryError> {
        let artists = self.store.search_artists(normalize_term(term)).await?;
        let ids: Vec<i32> = artists.iter().map(|a| a.id).collect();
        let upcoming = self.store.upcoming_counts_by_artist(&ids, now).await?;

        let data = artists
            .into_iter()
            .map(|a| ArtistSummary {
                num_upcoming_shows: upcoming.get(&a.id).copied().unwrap_or(0),
                id: a.id,
                name: a.name,
            })
            .collect();

        Ok(SearchResults::new(data))
    }

    async fn get(&self, id: i32) -> Result<Artist, DirectoryError> {
        self.store
            .get_artist(id)
            .await?
            .ok_or(DirectoryError::artist_not_found(id))
    }

    async fn detail(&self, id: i32, now: NaiveDateTime) -> Result<ArtistDetail, DirectoryError> {
        let artist = self.get(id).await?;
        let schedule = artist_schedule(&self.store, id, now).await?;
        Ok(ArtistDetail::new(artist, schedule))
    }

    async fn create(&self, input: ArtistInput) -> Result<Artist, DirectoryError> {
        Ok(self.store.add_artist(&input).await?)
    }

    async fn update(&self, id: i32, input: ArtistInput) -> Result<Artist, DirectoryError> {
        self.store
            .update_artist(id, &input)
            .await?
            .ok_or(DirectoryError::artist_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::show::ShowInput;
    use crate::models::venue::VenueInput;
    use chrono::{Duration, Utc};

    fn input(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            website_link: Some("https://www.gunsnpetalsband.com".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            looking_for_venues: true,
            seeking_description: Some("Looking for shows in the Bay Area".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn editing_only_the_name_changes_only_the_name() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeaOrmArtistService::new(store);
        let artist = service.create(input("Guns N Petals")).await.unwrap();

        let mut resubmitted = input("Guns N Roses");
        resubmitted.genres = artist.genres.clone();
        let updated = service.update(artist.id, resubmitted).await.unwrap();

        assert_eq!(updated.name, "Guns N Roses");
        assert_eq!(
            Artist {
                name: artist.name.clone(),
                ..updated
            },
            artist
        );
    }

    #[tokio::test]
    async fn detail_lists_venues_for_each_show() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeaOrmArtistService::new(store.clone());
        let artist = service.create(input("The Wild Sax Band")).await.unwrap();
        let venue = store
            .add_venue(&VenueInput {
                name: "Park Square Live Music & Coffee".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "34 Whiskey Moore Ave".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let now = Utc::now().naive_utc();
        store
            .add_show(&ShowInput {
                venue_id: venue.id,
                artist_id: artist.id,
                start_time: now + Duration::days(2),
            })
            .await
            .unwrap();

        let detail = service.detail(artist.id, now).await.unwrap();
        assert!(detail.seeking_venue);
        assert!(detail.schedule.past_shows.is_empty());
        assert_eq!(detail.schedule.past_shows_count, 0);
        assert_eq!(detail.schedule.upcoming_shows_count, 1);
        assert_eq!(
            detail.schedule.upcoming_shows[0].venue_name,
            "Park Square Live Music & Coffee"
        );

        let results = service.search("sax", now).await.unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].num_upcoming_shows, 1);
    }

    #[tokio::test]
    async fn missing_artist_is_not_found() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeaOrmArtistService::new(store);
        assert!(matches!(
            service.get(5).await,
            Err(DirectoryError::NotFound { entity: "Artist", id: 5 })
        ));
    }
}
