use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::services::{ArtistService, ShowService, VenueService};
use crate::state::SharedState;

mod artists;
mod error;
pub mod flash;
pub mod form_data;
pub mod forms;
mod home;
mod observability;
mod shows;
mod system;
mod types;
pub mod validation;
mod venues;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn venues(&self) -> &dyn VenueService {
        self.shared.venue_service.as_ref()
    }

    #[must_use]
    pub fn artists(&self) -> &dyn ArtistService {
        self.shared.artist_service.as_ref()
    }

    #[must_use]
    pub fn shows(&self) -> &dyn ShowService {
        self.shared.show_service.as_ref()
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let config = state.config();

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.session.expiry_minutes,
        )));

    let cors_origins = &config.server.cors_allowed_origins;
    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .merge(directory_routes())
        .route("/health", get(system::health))
        .route("/metrics", get(system::metrics))
        .route_layer(middleware::from_fn(observability::track_requests))
        .fallback(home::not_found)
        .layer(session_layer)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn directory_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home::index))
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route("/venues/{id}", get(venues::show_venue))
        .route(
            "/venues/{id}/edit",
            get(venues::edit_venue).post(venues::edit_venue_submission),
        )
        .route(
            "/venues/{id}/delete",
            post(venues::delete_venue).delete(venues::delete_venue),
        )
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/{id}", get(artists::show_artist))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_artist).post(artists::edit_artist_submission),
        )
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}
