//! Text encoding for the genre lists stored on venues and artists.
//!
//! Genres are written as a JSON array. Rows imported from older databases may
//! carry the brace form `{Jazz,"Hip-Hop"}` or a bare comma list; both are
//! still readable.

use tracing::warn;

/// Encodes a genre list for storage. Blank entries are dropped.
#[must_use]
pub fn encode(genres: &[String]) -> String {
    let cleaned: Vec<&str> = genres
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect();

    serde_json::to_string(&cleaned).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored genre column. `None` and empty text decode to no genres.
#[must_use]
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    if raw.starts_with('[') {
        return match serde_json::from_str::<Vec<String>>(raw) {
            Ok(genres) => genres,
            Err(e) => {
                warn!("Unreadable genre list {:?}: {}", raw, e);
                Vec::new()
            }
        };
    }

    let inner = raw
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(raw);

    inner
        .split(',')
        .map(|g| g.trim().trim_matches('"').trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn jazz_and_blues_survive_storage() {
        let genres = owned(&["Jazz", "Blues"]);
        let stored = encode(&genres);
        assert_eq!(decode(Some(&stored)), genres);
    }

    #[test]
    fn commas_and_quotes_inside_names_survive() {
        let genres = owned(&["Rock, Alternative", "R\"n\"B"]);
        assert_eq!(decode(Some(&encode(&genres))), genres);
    }

    #[test]
    fn blank_entries_are_dropped() {
        assert_eq!(encode(&owned(&["", "  ", "Folk "])), r#"["Folk"]"#);
        assert_eq!(encode(&[]), "[]");
    }

    #[test]
    fn legacy_brace_form_is_readable() {
        assert_eq!(
            decode(Some(r#"{Jazz,"Hip-Hop",Blues}"#)),
            owned(&["Jazz", "Hip-Hop", "Blues"])
        );
        assert_eq!(decode(Some("{}")), Vec::<String>::new());
        assert_eq!(decode(Some("Country, Folk")), owned(&["Country", "Folk"]));
    }

    #[test]
    fn missing_or_broken_values_decode_empty() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("   ")).is_empty());
        assert!(decode(Some("[not json")).is_empty());
    }
}
