mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{GUNS_N_PETALS, MUSICAL_HOP, TestApp};
use marquee::models::show::ShowInput;

#[tokio::test]
async fn create_artist_then_list() {
    let mut app = TestApp::spawn().await;

    let response = app.post_form("/artists/create", GUNS_N_PETALS).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        app.flashes().await,
        vec!["Artist Guns N Petals was successfully listed!"]
    );

    let list = app.get("/artists").await;
    assert_eq!(list.json["view"], "pages/artists");
    assert_eq!(
        list.json["data"],
        serde_json::json!([{ "id": 1, "name": "Guns N Petals" }])
    );
}

#[tokio::test]
async fn missing_state_is_rejected() {
    let mut app = TestApp::spawn().await;

    let response = app
        .post_form("/artists/create", "name=Solo&city=Reno&state=++")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        app.flashes().await,
        vec!["An error occurred. Artist Solo could not be listed."]
    );
    assert!(app.state.store().list_artists().await.unwrap().is_empty());
}

#[tokio::test]
async fn editing_only_the_name_changes_only_the_name() {
    let mut app = TestApp::spawn().await;
    app.post_form("/artists/create", GUNS_N_PETALS).await;

    let before = app.get("/artists/1").await.json["data"].clone();

    let edited = GUNS_N_PETALS.replacen("name=Guns+N+Petals", "name=Guns+N+Roses", 1);
    let response = app.post_form("/artists/1/edit", &edited).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/artists/1"));

    let mut after = app.get("/artists/1").await.json["data"].clone();
    assert_eq!(after["name"], "Guns N Roses");

    after["name"] = before["name"].clone();
    assert_eq!(after, before);
}

#[tokio::test]
async fn edit_form_maps_flag_to_checkbox_name() {
    let mut app = TestApp::spawn().await;
    app.post_form("/artists/create", GUNS_N_PETALS).await;

    let form = app.get("/artists/1/edit").await;
    assert_eq!(form.json["view"], "forms/edit_artist");
    assert_eq!(form.json["data"]["form"]["seeking_venue"], true);
    assert_eq!(
        form.json["data"]["form"]["genres"],
        serde_json::json!(["Rock n Roll"])
    );

    assert_eq!(app.get("/artists/9/edit").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.post_form("/artists/9/edit", GUNS_N_PETALS).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn detail_lists_venues_with_counts() {
    let mut app = TestApp::spawn().await;
    app.post_form("/artists/create", GUNS_N_PETALS).await;
    app.post_form("/venues/create", MUSICAL_HOP).await;

    let now = Utc::now().naive_utc();
    for offset in [-10, -5, 5] {
        app.state
            .store()
            .add_show(&ShowInput {
                venue_id: 1,
                artist_id: 1,
                start_time: now + Duration::days(offset),
            })
            .await
            .unwrap();
    }

    let detail = app.get("/artists/1").await;
    assert_eq!(detail.json["view"], "pages/show_artist");
    let data = &detail.json["data"];
    assert_eq!(data["seeking_venue"], true);
    assert_eq!(data["website"], "https://www.gunsnpetalsband.com");
    assert_eq!(data["past_shows_count"], 2);
    assert_eq!(data["upcoming_shows_count"], 1);
    assert_eq!(data["past_shows"][0]["venue_name"], "The Musical Hop");
    assert_eq!(data["past_shows"][0]["venue_image_link"], "https://example.com/hop.jpg");

    let search = app.post_form("/artists/search", "search_term=PETALS").await;
    assert_eq!(search.json["data"]["results"]["count"], 1);
    assert_eq!(search.json["data"]["results"]["data"][0]["num_upcoming_shows"], 1);
}

#[tokio::test]
async fn artists_cannot_be_deleted() {
    let mut app = TestApp::spawn().await;
    app.post_form("/artists/create", GUNS_N_PETALS).await;

    let response = app.post_form("/artists/1/delete", "").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.state.store().list_artists().await.unwrap().len(), 1);
}
