use axum::{extract::State, response::Redirect};
use chrono::Utc;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::info;

use super::form_data::FormData;
use super::forms::VenueForm;
use super::validation::EntityId;
use super::{ApiError, AppState, EditPage, Flash, FormPage, SearchPage, View, flash};
use crate::services::venue_service::{VenueArea, VenueDetail, VenueSummary};

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<View<Vec<VenueArea>>, ApiError> {
    let areas = state.venues().list_areas(Utc::now().naive_utc()).await?;
    flash::render(&session, "pages/venues", areas).await
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: FormData,
) -> Result<View<SearchPage<VenueSummary>>, ApiError> {
    let search_term = form.get("search_term").unwrap_or_default().to_string();
    let results = state
        .venues()
        .search(&search_term, Utc::now().naive_utc())
        .await?;

    flash::render(
        &session,
        "pages/search_venues",
        SearchPage {
            search_term,
            results,
        },
    )
    .await
}

pub async fn show_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<View<VenueDetail>, ApiError> {
    let detail = state.venues().detail(id, Utc::now().naive_utc()).await?;
    flash::render(&session, "pages/show_venue", detail).await
}

pub async fn create_venue_form(session: Session) -> Result<View<FormPage<VenueForm>>, ApiError> {
    flash::render(
        &session,
        "forms/new_venue",
        FormPage {
            form: VenueForm::default(),
        },
    )
    .await
}

pub async fn create_venue_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: FormData,
) -> Result<Redirect, ApiError> {
    let form = VenueForm::from_form(&form);
    let name = form.name.clone();

    let result = async {
        let input = form.into_input()?;
        Ok::<_, ApiError>(state.venues().create(input).await?)
    }
    .await;

    match result {
        Ok(venue) => {
            flash::push(
                &session,
                Flash::success(format!("Venue {} was successfully listed!", venue.name)),
            )
            .await?;
            Ok(Redirect::to("/"))
        }
        Err(e) => Err(flash::fail(
            &session,
            format!("An error occurred. Venue {name} could not be listed."),
            e,
        )
        .await),
    }
}

pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<View<EditPage<VenueForm>>, ApiError> {
    let venue = state.venues().get(id).await?;
    flash::render(
        &session,
        "forms/edit_venue",
        EditPage {
            id,
            form: VenueForm::from(venue),
        },
    )
    .await
}

pub async fn edit_venue_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
    form: FormData,
) -> Result<Redirect, ApiError> {
    let form = VenueForm::from_form(&form);
    let name = form.name.clone();

    let result = async {
        let input = form.into_input()?;
        Ok::<_, ApiError>(state.venues().update(id, input).await?)
    }
    .await;

    match result {
        Ok(venue) => {
            flash::push(
                &session,
                Flash::success(format!("Venue {} was successfully updated!", venue.name)),
            )
            .await?;
            Ok(Redirect::to(&format!("/venues/{id}")))
        }
        Err(e) => Err(flash::fail(
            &session,
            format!("An error occurred. Venue {name} could not be updated."),
            e,
        )
        .await),
    }
}

/// `POST|DELETE /venues/{id}/delete`
///
/// Removes the venue together with every show booked there.
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Redirect, ApiError> {
    let venue = state.venues().get(id).await?;

    match state.venues().delete(id).await {
        Ok(_) => {
            info!("Deleted venue {} ({})", venue.name, id);
            flash::push(
                &session,
                Flash::success(format!("Venue '{}' was successfully deleted!", venue.name)),
            )
            .await?;
            Ok(Redirect::to("/"))
        }
        Err(e) => Err(flash::fail(
            &session,
            format!(
                "An error occurred. Venue '{}' could not be deleted.",
                venue.name
            ),
            e,
        )
        .await),
    }
}
