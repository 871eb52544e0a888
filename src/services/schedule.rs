//! Past/upcoming show schedules for venue and artist detail pages.
//!
//! Each entry is enriched with the counterpart of the anchor entity: a venue's
//! schedule lists artists, an artist's schedule lists venues. Counterparts are
//! loaded in one batch per schedule.

use crate::db::Store;
use crate::domain::ShowOwner;
use crate::models::show::Show;
use crate::services::DirectoryError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::warn;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Schedule<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: u64,
    pub upcoming_shows_count: u64,
}

/// A show as seen from a venue page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistAppearance {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show as seen from an artist page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueAppearance {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

struct Split {
    past: Vec<Show>,
    upcoming: Vec<Show>,
    past_count: u64,
    upcoming_count: u64,
}

async fn load_split(
    store: &Store,
    owner: ShowOwner,
    now: NaiveDateTime,
) -> Result<Split, DirectoryError> {
    Ok(Split {
        past: store.past_shows(owner, now).await?,
        upcoming: store.upcoming_shows(owner, now).await?,
        past_count: store.count_past_shows(owner, now).await?,
        upcoming_count: store.count_upcoming_shows(owner, now).await?,
    })
}

fn unique_ids(split: &Split, key: impl Fn(&Show) -> i32) -> Vec<i32> {
    split
        .past
        .iter()
        .chain(&split.upcoming)
        .map(key)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}

fn enrich<T>(shows: Vec<Show>, owner: ShowOwner, build: impl Fn(&Show) -> Option<T>) -> Vec<T> {
    shows
        .iter()
        .filter_map(|show| {
            let entry = build(show);
            if entry.is_none() {
                warn!("Show {} of {} references a missing record", show.id, owner);
            }
            entry
        })
        .collect()
}

pub async fn venue_schedule(
    store: &Store,
    venue_id: i32,
    now: NaiveDateTime,
) -> Result<Schedule<ArtistAppearance>, DirectoryError> {
    let owner = ShowOwner::Venue(venue_id);
    let split = load_split(store, owner, now).await?;

    let artists: HashMap<i32, _> = store
        .get_artists_by_ids(&unique_ids(&split, |s| s.artist_id))
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    let build = |show: &Show| {
        artists.get(&show.artist_id).map(|artist| ArtistAppearance {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time,
        })
    };

    Ok(Schedule {
        past_shows: enrich(split.past, owner, build),
        upcoming_shows: enrich(split.upcoming, owner, build),
        past_shows_count: split.past_count,
        upcoming_shows_count: split.upcoming_count,
    })
}

pub async fn artist_schedule(
    store: &Store,
    artist_id: i32,
    now: NaiveDateTime,
) -> Result<Schedule<VenueAppearance>, DirectoryError> {
    let owner = ShowOwner::Artist(artist_id);
    let split = load_split(store, owner, now).await?;

    let venues: HashMap<i32, _> = store
        .get_venues_by_ids(&unique_ids(&split, |s| s.venue_id))
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    let build = |show: &Show| {
        venues.get(&show.venue_id).map(|venue| VenueAppearance {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: show.start_time,
        })
    };

    Ok(Schedule {
        past_shows: enrich(split.past, owner, build),
        upcoming_shows: enrich(split.upcoming, owner, build),
        past_shows_count: split.past_count,
        upcoming_shows_count: split.upcoming_count,
    })
}
