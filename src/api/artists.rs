use axum::{extract::State, response::Redirect};
use chrono::Utc;
use std::sync::Arc;
use tower_sessions::Session;

use super::form_data::FormData;
use super::forms::ArtistForm;
use super::validation::EntityId;
use super::{ApiError, AppState, EditPage, Flash, FormPage, SearchPage, View, flash};
use crate::services::artist_service::{ArtistDetail, ArtistListing, ArtistSummary};

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<View<Vec<ArtistListing>>, ApiError> {
    let artists = state.artists().list().await?;
    flash::render(&session, "pages/artists", artists).await
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: FormData,
) -> Result<View<SearchPage<ArtistSummary>>, ApiError> {
    let search_term = form.get("search_term").unwrap_or_default().to_string();
    let results = state
        .artists()
        .search(&search_term, Utc::now().naive_utc())
        .await?;

    flash::render(
        &session,
        "pages/search_artists",
        SearchPage {
            search_term,
            results,
        },
    )
    .await
}

pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<View<ArtistDetail>, ApiError> {
    let detail = state.artists().detail(id, Utc::now().naive_utc()).await?;
    flash::render(&session, "pages/show_artist", detail).await
}

pub async fn create_artist_form(session: Session) -> Result<View<FormPage<ArtistForm>>, ApiError> {
    flash::render(
        &session,
        "forms/new_artist",
        FormPage {
            form: ArtistForm::default(),
        },
    )
    .await
}

pub async fn create_artist_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: FormData,
) -> Result<Redirect, ApiError> {
    let form = ArtistForm::from_form(&form);
    let name = form.name.clone();

    let result = async {
        let input = form.into_input()?;
        Ok::<_, ApiError>(state.artists().create(input).await?)
    }
    .await;

    match result {
        Ok(artist) => {
            flash::push(
                &session,
                Flash::success(format!("Artist {} was successfully listed!", artist.name)),
            )
            .await?;
            Ok(Redirect::to("/"))
        }
        Err(e) => Err(flash::fail(
            &session,
            format!("An error occurred. Artist {name} could not be listed."),
            e,
        )
        .await),
    }
}

pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<View<EditPage<ArtistForm>>, ApiError> {
    let artist = state.artists().get(id).await?;
    flash::render(
        &session,
        "forms/edit_artist",
        EditPage {
            id,
            form: ArtistForm::from(artist),
        },
    )
    .await
}

/// Overwrites every field of the artist with the submitted values.
pub async fn edit_artist_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
    form: FormData,
) -> Result<Redirect, ApiError> {
    let form = ArtistForm::from_form(&form);
    let name = form.name.clone();

    let result = async {
        let input = form.into_input()?;
        Ok::<_, ApiError>(state.artists().update(id, input).await?)
    }
    .await;

    match result {
        Ok(artist) => {
            flash::push(
                &session,
                Flash::success(format!("Artist {} was successfully updated!", artist.name)),
            )
            .await?;
            Ok(Redirect::to(&format!("/artists/{id}")))
        }
        Err(e) => Err(flash::fail(
            &session,
            format!("An error occurred. Artist {name} could not be updated."),
            e,
        )
        .await),
    }
}
