#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use marquee::api::AppState;
use marquee::config::Config;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh in-memory database that replays the session cookie
/// like a browser would, so flashes survive across requests.
pub struct TestApp {
    pub state: Arc<AppState>,
    router: Router,
    cookie: Option<String>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub json: serde_json::Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config = Config::default();
        config.general.database_path = "sqlite::memory:".to_string();

        let state = marquee::api::create_app_state_from_config(config, None)
            .await
            .expect("Failed to create app state");
        let router = marquee::api::router(state.clone());

        Self {
            state,
            router,
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&mut self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
                )
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Drains the pending flashes by visiting the home page.
    pub async fn flashes(&mut self) -> Vec<String> {
        let home = self.get("/").await;
        home.json["flashes"]
            .as_array()
            .map(|flashes| {
                flashes
                    .iter()
                    .filter_map(|f| f["message"].as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

        TestResponse {
            status,
            location,
            json,
        }
    }
}

pub const MUSICAL_HOP: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
    &address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Reggae\
    &image_link=https%3A%2F%2Fexample.com%2Fhop.jpg&facebook_link=&website_link=\
    &seeking_talent=y&seeking_description=We+are+on+the+lookout+for+a+local+artist";

pub const GUNS_N_PETALS: &str = "name=Guns+N+Petals&city=San+Francisco&state=CA\
    &phone=326-123-5000&genres=Rock+n+Roll&image_link=https%3A%2F%2Fexample.com%2Fgnp.jpg\
    &facebook_link=https%3A%2F%2Fwww.facebook.com%2FGunsNPetals\
    &website_link=https%3A%2F%2Fwww.gunsnpetalsband.com&seeking_venue=y\
    &seeking_description=Looking+for+shows+in+the+San+Francisco+Bay+Area";
