use serde::Serialize;

/// Matches for a name search together with their count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Trims the submitted term. An empty term matches every record.
#[must_use]
pub fn normalize_term(term: &str) -> &str {
    term.trim()
}
