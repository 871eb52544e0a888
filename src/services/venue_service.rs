//! Domain service for venues: area listing, search, detail pages and
//! mutations.

use crate::models::venue::{Venue, VenueInput};
use crate::services::DirectoryError;
use crate::services::schedule::{ArtistAppearance, Schedule};
use crate::services::search::SearchResults;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub schedule: Schedule<ArtistAppearance>,
}

impl VenueDetail {
    #[must_use]
    pub fn new(venue: Venue, schedule: Schedule<ArtistAppearance>) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.looking_for_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            schedule,
        }
    }
}

/// Groups venues by (city, state), keeping the order in which each area is
/// first seen. Venues without an entry in `upcoming` have no upcoming shows.
#[must_use]
pub fn group_by_area(venues: Vec<Venue>, upcoming: &HashMap<i32, u64>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };

        let key = (venue.city, venue.state);
        if let Some(&pos) = index.get(&key) {
            areas[pos].venues.push(summary);
        } else {
            index.insert(key.clone(), areas.len());
            areas.push(VenueArea {
                city: key.0,
                state: key.1,
                venues: vec![summary],
            });
        }
    }

    areas
}

/// Domain service trait for venue operations.
///
/// Every read that classifies shows takes `now` from the caller.
#[async_trait::async_trait]
pub trait VenueService: Send + Sync {
    /// Lists every venue grouped by (city, state) with upcoming show counts.
    async fn list_areas(&self, now: NaiveDateTime) -> Result<Vec<VenueArea>, DirectoryError>;

    /// Case-insensitive substring search on venue name.
    async fn search(
        &self,
        term: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResults<VenueSummary>, DirectoryError>;

    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no venue has this id.
    async fn get(&self, id: i32) -> Result<Venue, DirectoryError>;

    /// Venue record plus its past/upcoming schedule.
    async fn detail(&self, id: i32, now: NaiveDateTime) -> Result<VenueDetail, DirectoryError>;

    async fn create(&self, input: VenueInput) -> Result<Venue, DirectoryError>;

    /// Overwrites every field of an existing venue.
    async fn update(&self, id: i32, input: VenueInput) -> Result<Venue, DirectoryError>;

    /// Deletes the venue and all shows booked there. Returns the removed
    /// venue.
    async fn delete(&self, id: i32) -> Result<Venue, DirectoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: String::new(),
            phone: None,
            image_link: None,
            facebook_link: None,
            website_link: None,
            genres: Vec::new(),
            looking_for_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn groups_by_city_and_state_in_first_seen_order() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue(4, "Portland Hall", "Portland", "ME"),
            venue(5, "Portland Arena", "Portland", "OR"),
        ];
        let upcoming = HashMap::from([(3, 1)]);

        let areas = group_by_area(venues, &upcoming);

        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("San Francisco", "CA"),
                ("New York", "NY"),
                ("Portland", "ME"),
                ("Portland", "OR"),
            ]
        );

        let sf: Vec<i32> = areas[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(sf, vec![1, 3]);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 1);
    }

    #[test]
    fn no_venues_no_areas() {
        assert!(group_by_area(Vec::new(), &HashMap::new()).is_empty());
    }
}
