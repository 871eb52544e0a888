use crate::domain::ShowOwner;
use crate::entities::{prelude::*, shows};
use crate::models::show::{Show, ShowInput};
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use tracing::info;

/// Show queries. Every time-based query takes `now` from the caller so that
/// past/upcoming splits are evaluated per request.
pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: shows::Model) -> Show {
        Show {
            id: model.id,
            venue_id: model.venue_id,
            artist_id: model.artist_id,
            start_time: model.start_time,
        }
    }

    fn owner_filter(owner: ShowOwner) -> SimpleExpr {
        match owner {
            ShowOwner::Venue(id) => shows::Column::VenueId.eq(id),
            ShowOwner::Artist(id) => shows::Column::ArtistId.eq(id),
        }
    }

    pub async fn add(&self, input: &ShowInput) -> Result<Show> {
        let txn = self.conn.begin().await?;

        let model = shows::ActiveModel {
            venue_id: Set(input.venue_id),
            artist_id: Set(input.artist_id),
            start_time: Set(input.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "Added show {}: artist {} at venue {} on {}",
            model.id, model.artist_id, model.venue_id, model.start_time
        );
        Ok(Self::map_model(model))
    }

    pub async fn list_all(&self) -> Result<Vec<Show>> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::StartTime)
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn upcoming(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<Vec<Show>> {
        let rows = Shows::find()
            .filter(Self::owner_filter(owner))
            .filter(shows::Column::StartTime.gte(now))
            .order_by_asc(shows::Column::StartTime)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn past(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<Vec<Show>> {
        let rows = Shows::find()
            .filter(Self::owner_filter(owner))
            .filter(shows::Column::StartTime.lt(now))
            .order_by_asc(shows::Column::StartTime)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn count_upcoming(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<u64> {
        let count = Shows::find()
            .filter(Self::owner_filter(owner))
            .filter(shows::Column::StartTime.gte(now))
            .count(&self.conn)
            .await?;

        Ok(count)
    }

    pub async fn count_past(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<u64> {
        let count = Shows::find()
            .filter(Self::owner_filter(owner))
            .filter(shows::Column::StartTime.lt(now))
            .count(&self.conn)
            .await?;

        Ok(count)
    }

    /// Upcoming show counts keyed by venue id, for venues with at least one.
    pub async fn upcoming_counts_by_venue(
        &self,
        venue_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, u64>> {
        self.upcoming_counts(shows::Column::VenueId, venue_ids, now)
            .await
    }

    /// Upcoming show counts keyed by artist id, for artists with at least one.
    pub async fn upcoming_counts_by_artist(
        &self,
        artist_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, u64>> {
        self.upcoming_counts(shows::Column::ArtistId, artist_ids, now)
            .await
    }

    async fn upcoming_counts(
        &self,
        column: shows::Column,
        ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, u64>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results: Vec<(i32, i64)> = Shows::find()
            .select_only()
            .column(column)
            .column_as(shows::Column::Id.count(), "count")
            .filter(column.is_in(ids.to_vec()))
            .filter(shows::Column::StartTime.gte(now))
            .group_by(column)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(results
            .into_iter()
            .map(|(id, count)| (id, u64::try_from(count).unwrap_or_default()))
            .collect())
    }
}
