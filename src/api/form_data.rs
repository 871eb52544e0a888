use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use url::form_urlencoded;

use super::ApiError;

/// An urlencoded form body that keeps repeated keys.
///
/// `axum::Form` deserializes into a struct and loses all but one value of a
/// repeated field, which breaks multi-select inputs such as `genres`.
#[derive(Debug, Clone, Default)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        Self(form_urlencoded::parse(body).into_owned().collect())
    }

    /// First value for `key`, untouched.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, trimmed, or `None` when missing or blank.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    }

    /// Every non-blank value submitted under `key`, in submission order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Checkbox semantics: only the literal `y` counts as checked.
    #[must_use]
    pub fn checked(&self, key: &str) -> bool {
        self.get(key) == Some("y")
    }
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?;
        Ok(Self::parse(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_fields_are_all_kept() {
        let form = FormData::parse(b"name=The+Dueling+Pianos&genres=Jazz&genres=Classical&genres=");
        assert_eq!(form.get("name"), Some("The Dueling Pianos"));
        assert_eq!(form.get_all("genres"), vec!["Jazz", "Classical"]);
        assert!(form.get_all("missing").is_empty());
    }

    #[test]
    fn blank_text_is_none() {
        let form = FormData::parse(b"phone=++&city=%20Oakland%20");
        assert_eq!(form.text("phone"), None);
        assert_eq!(form.text("city").as_deref(), Some("Oakland"));
        assert_eq!(form.text("state"), None);
    }

    #[test]
    fn checkbox_requires_literal_y() {
        assert!(FormData::parse(b"seeking_talent=y").checked("seeking_talent"));
        assert!(!FormData::parse(b"seeking_talent=on").checked("seeking_talent"));
        assert!(!FormData::parse(b"seeking_talent=Y").checked("seeking_talent"));
        assert!(!FormData::parse(b"").checked("seeking_talent"));
    }
}
