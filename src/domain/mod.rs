//! Domain primitives shared by the store, services and handlers.

pub mod genres;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The side of a show a schedule query is anchored on.
///
/// A show belongs to exactly one venue and one artist; schedule lookups
/// filter on one of the two foreign keys.
///
/// ```rust
/// use marquee::domain::ShowOwner;
///
/// let owner = ShowOwner::Venue(3);
/// assert_eq!(owner.id(), 3);
/// assert_eq!(owner.to_string(), "venue 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowOwner {
    Venue(i32),
    Artist(i32),
}

impl ShowOwner {
    #[must_use]
    pub const fn id(&self) -> i32 {
        match self {
            Self::Venue(id) | Self::Artist(id) => *id,
        }
    }
}

impl fmt::Display for ShowOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Venue(id) => write!(f, "venue {id}"),
            Self::Artist(id) => write!(f, "artist {id}"),
        }
    }
}

/// Where a show sits relative to a reference instant.
///
/// Shows starting exactly at `now` count as upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    Past,
    Upcoming,
}

impl Timing {
    #[must_use]
    pub fn of(start_time: NaiveDateTime, now: NaiveDateTime) -> Self {
        if start_time >= now {
            Self::Upcoming
        } else {
            Self::Past
        }
    }

    #[must_use]
    pub const fn is_upcoming(&self) -> bool {
        matches!(self, Self::Upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn show_owner_exposes_id() {
        assert_eq!(ShowOwner::Venue(7).id(), 7);
        assert_eq!(ShowOwner::Artist(9).id(), 9);
        assert_ne!(ShowOwner::Venue(1), ShowOwner::Artist(1));
    }

    #[test]
    fn timing_boundary_is_upcoming() {
        let now = Utc::now().naive_utc();
        assert_eq!(Timing::of(now, now), Timing::Upcoming);
        assert_eq!(Timing::of(now + Duration::hours(1), now), Timing::Upcoming);
        assert_eq!(Timing::of(now - Duration::seconds(1), now), Timing::Past);
        assert!(!Timing::Past.is_upcoming());
    }
}
