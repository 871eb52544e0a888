use axum::{extract::State, response::Redirect};
use chrono::Utc;
use std::sync::Arc;
use tower_sessions::Session;

use super::form_data::FormData;
use super::forms::ShowForm;
use super::{ApiError, AppState, Flash, FormPage, View, flash};
use crate::services::show_service::ShowListing;

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<View<Vec<ShowListing>>, ApiError> {
    let shows = state.shows().list(Utc::now().naive_utc()).await?;
    flash::render(&session, "pages/shows", shows).await
}

pub async fn create_show_form(session: Session) -> Result<View<FormPage<ShowForm>>, ApiError> {
    flash::render(
        &session,
        "forms/new_show",
        FormPage {
            form: ShowForm::blank(Utc::now().naive_utc()),
        },
    )
    .await
}

pub async fn create_show_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: FormData,
) -> Result<Redirect, ApiError> {
    let form = ShowForm::from_form(&form);

    let result = async {
        let input = form.into_input()?;
        Ok::<_, ApiError>(state.shows().create(input).await?)
    }
    .await;

    match result {
        Ok(_) => {
            flash::push(&session, Flash::success("Show was successfully listed!")).await?;
            Ok(Redirect::to("/"))
        }
        Err(e) => Err(flash::fail(
            &session,
            "An error occurred. Show could not be listed.".to_string(),
            e,
        )
        .await),
    }
}
