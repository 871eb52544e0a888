use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-shot status message shown on the next rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Structured page handed to the external renderer: the template name, the
/// pending flashes and the page data.
#[derive(Debug, Serialize)]
pub struct View<T> {
    pub view: &'static str,
    pub flashes: Vec<Flash>,
    pub data: T,
    #[serde(skip)]
    pub status: StatusCode,
}

impl<T> View<T> {
    pub const fn new(view: &'static str, flashes: Vec<Flash>, data: T) -> Self {
        Self {
            view,
            flashes,
            data,
            status: StatusCode::OK,
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorData {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SearchPage<T> {
    pub search_term: String,
    pub results: crate::services::search::SearchResults<T>,
}

#[derive(Debug, Serialize)]
pub struct FormPage<F> {
    pub form: F,
}

#[derive(Debug, Serialize)]
pub struct EditPage<F> {
    pub id: i32,
    pub form: F,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_without_status() {
        let view = View::new("pages/home", vec![Flash::success("Saved")], ())
            .with_status(StatusCode::CREATED);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["view"], "pages/home");
        assert_eq!(json["flashes"][0]["level"], "success");
        assert_eq!(json["flashes"][0]["message"], "Saved");
        assert!(json["data"].is_null());
        assert!(json.get("status").is_none());
    }
}
