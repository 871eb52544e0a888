use crate::domain::ShowOwner;
use crate::models::artist::{Artist, ArtistInput};
use crate::models::show::{Show, ShowInput};
use crate::models::venue::{Venue, VenueInput};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Handle to the directory database. Cheap to clone; every clone shares the
/// same connection pool.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file: {path_str}"))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // Each pooled connection to sqlite::memory: is its own database.
        if in_memory {
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(max_connections)
                .min_connections(min_connections)
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn venue_repo(&self) -> repositories::venue::VenueRepository {
        repositories::venue::VenueRepository::new(self.conn.clone())
    }

    fn artist_repo(&self) -> repositories::artist::ArtistRepository {
        repositories::artist::ArtistRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    // Venues

    pub async fn add_venue(&self, input: &VenueInput) -> Result<Venue> {
        self.venue_repo().add(input).await
    }

    pub async fn get_venue(&self, id: i32) -> Result<Option<Venue>> {
        self.venue_repo().get(id).await
    }

    pub async fn get_venues_by_ids(&self, ids: &[i32]) -> Result<Vec<Venue>> {
        self.venue_repo().get_by_ids(ids).await
    }

    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.venue_repo().list_all().await
    }

    pub async fn search_venues(&self, term: &str) -> Result<Vec<Venue>> {
        self.venue_repo().search_by_name(term).await
    }

    pub async fn update_venue(&self, id: i32, input: &VenueInput) -> Result<Option<Venue>> {
        self.venue_repo().update(id, input).await
    }

    pub async fn remove_venue(&self, id: i32) -> Result<Option<Venue>> {
        self.venue_repo().remove_with_shows(id).await
    }

    // Artists

    pub async fn add_artist(&self, input: &ArtistInput) -> Result<Artist> {
        self.artist_repo().add(input).await
    }

    pub async fn get_artist(&self, id: i32) -> Result<Option<Artist>> {
        self.artist_repo().get(id).await
    }

    pub async fn get_artists_by_ids(&self, ids: &[i32]) -> Result<Vec<Artist>> {
        self.artist_repo().get_by_ids(ids).await
    }

    pub async fn list_artists(&self) -> Result<Vec<Artist>> {
        self.artist_repo().list_all().await
    }

    pub async fn search_artists(&self, term: &str) -> Result<Vec<Artist>> {
        self.artist_repo().search_by_name(term).await
    }

    pub async fn update_artist(&self, id: i32, input: &ArtistInput) -> Result<Option<Artist>> {
        self.artist_repo().update(id, input).await
    }

    // Shows

    pub async fn add_show(&self, input: &ShowInput) -> Result<Show> {
        self.show_repo().add(input).await
    }

    pub async fn list_shows(&self) -> Result<Vec<Show>> {
        self.show_repo().list_all().await
    }

    pub async fn upcoming_shows(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<Vec<Show>> {
        self.show_repo().upcoming(owner, now).await
    }

    pub async fn past_shows(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<Vec<Show>> {
        self.show_repo().past(owner, now).await
    }

    pub async fn count_upcoming_shows(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<u64> {
        self.show_repo().count_upcoming(owner, now).await
    }

    pub async fn count_past_shows(&self, owner: ShowOwner, now: NaiveDateTime) -> Result<u64> {
        self.show_repo().count_past(owner, now).await
    }

    pub async fn upcoming_counts_by_venue(
        &self,
        venue_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, u64>> {
        self.show_repo()
            .upcoming_counts_by_venue(venue_ids, now)
            .await
    }

    pub async fn upcoming_counts_by_artist(
        &self,
        artist_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, u64>> {
        self.show_repo()
            .upcoming_counts_by_artist(artist_ids, now)
            .await
    }
}
