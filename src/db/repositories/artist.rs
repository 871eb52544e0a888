use crate::domain::genres;
use crate::entities::{artists, prelude::*};
use crate::models::artist::{Artist, ArtistInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

pub struct ArtistRepository {
    conn: DatabaseConnection,
}

impl ArtistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: artists::Model) -> Artist {
        Artist {
            id: model.id,
            genres: genres::decode(model.genres.as_deref()),
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            looking_for_venues: model.looking_for_venues,
            seeking_description: model.seeking_description,
        }
    }

    fn active_model(input: &ArtistInput) -> artists::ActiveModel {
        artists::ActiveModel {
            name: Set(input.name.clone()),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            phone: Set(input.phone.clone()),
            image_link: Set(input.image_link.clone()),
            facebook_link: Set(input.facebook_link.clone()),
            website_link: Set(input.website_link.clone()),
            genres: Set(Some(genres::encode(&input.genres))),
            looking_for_venues: Set(input.looking_for_venues),
            seeking_description: Set(input.seeking_description.clone()),
            ..Default::default()
        }
    }

    pub async fn add(&self, input: &ArtistInput) -> Result<Artist> {
        let txn = self.conn.begin().await?;
        let model = Self::active_model(input).insert(&txn).await?;
        txn.commit().await?;

        info!("Added artist {}: {}", model.id, model.name);
        Ok(Self::map_model(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Artist>> {
        let result = Artists::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(Self::map_model))
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Artist>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Artists::find()
            .filter(artists::Column::Id.is_in(ids.to_vec()))
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<Artist>> {
        let rows = Artists::find()
            .order_by_asc(artists::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>> {
        let rows = Artists::find()
            .order_by_asc(artists::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|row| super::name_matches(&row.name, term))
            .map(Self::map_model)
            .collect())
    }

    pub async fn update(&self, id: i32, input: &ArtistInput) -> Result<Option<Artist>> {
        let txn = self.conn.begin().await?;

        if Artists::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }

        let mut active = Self::active_model(input);
        active.id = Unchanged(id);
        let model = active.update(&txn).await?;

        txn.commit().await?;

        info!("Updated artist {}: {}", id, model.name);
        Ok(Some(Self::map_model(model)))
    }
}
