use crate::domain::genres;
use crate::entities::{prelude::*, shows, venues};
use crate::models::venue::{Venue, VenueInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

pub struct VenueRepository {
    conn: DatabaseConnection,
}

impl VenueRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: venues::Model) -> Venue {
        Venue {
            id: model.id,
            genres: genres::decode(model.genres.as_deref()),
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            looking_for_talent: model.looking_for_talent,
            seeking_description: model.seeking_description,
        }
    }

    fn active_model(input: &VenueInput) -> venues::ActiveModel {
        venues::ActiveModel {
            name: Set(input.name.clone()),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            address: Set(input.address.clone()),
            phone: Set(input.phone.clone()),
            image_link: Set(input.image_link.clone()),
            facebook_link: Set(input.facebook_link.clone()),
            website_link: Set(input.website_link.clone()),
            genres: Set(Some(genres::encode(&input.genres))),
            looking_for_talent: Set(input.looking_for_talent),
            seeking_description: Set(input.seeking_description.clone()),
            ..Default::default()
        }
    }

    pub async fn add(&self, input: &VenueInput) -> Result<Venue> {
        let txn = self.conn.begin().await?;
        let model = Self::active_model(input).insert(&txn).await?;
        txn.commit().await?;

        info!("Added venue {}: {}", model.id, model.name);
        Ok(Self::map_model(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Venue>> {
        let result = Venues::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(Self::map_model))
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Venue>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Venues::find()
            .filter(venues::Column::Id.is_in(ids.to_vec()))
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<Venue>> {
        let rows = Venues::find()
            .order_by_asc(venues::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>> {
        let rows = Venues::find()
            .order_by_asc(venues::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|row| super::name_matches(&row.name, term))
            .map(Self::map_model)
            .collect())
    }

    /// Overwrites every writable column. Returns `None` when the venue does
    /// not exist.
    pub async fn update(&self, id: i32, input: &VenueInput) -> Result<Option<Venue>> {
        let txn = self.conn.begin().await?;

        if Venues::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }

        let mut active = Self::active_model(input);
        active.id = Unchanged(id);
        let model = active.update(&txn).await?;

        txn.commit().await?;

        info!("Updated venue {}: {}", id, model.name);
        Ok(Some(Self::map_model(model)))
    }

    /// Deletes the venue and every show booked there in one transaction.
    pub async fn remove_with_shows(&self, id: i32) -> Result<Option<Venue>> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Venues::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let removed_shows = Shows::delete_many()
            .filter(shows::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;

        Venues::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            "Removed venue {} ({}) and {} show(s)",
            id, existing.name, removed_shows.rows_affected
        );
        Ok(Some(Self::map_model(existing)))
    }
}
