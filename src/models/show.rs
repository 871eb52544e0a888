use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i32,
    pub venue_id: i32,
    pub artist_id: i32,
    /// UTC wall-clock start.
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowInput {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
}
