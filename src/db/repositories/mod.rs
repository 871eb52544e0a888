pub mod artist;
pub mod show;
pub mod venue;

/// Case-insensitive "name contains term" check. Both sides are folded with
/// Unicode lowercasing; SQLite `LOWER()` only folds ASCII, so the match runs
/// here rather than in SQL. An empty term matches every name.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::name_matches;

    #[test]
    fn folds_non_ascii_letters() {
        assert!(name_matches("Élan Ballroom", "Élan"));
        assert!(name_matches("Élan Ballroom", "élan"));
        assert!(name_matches("Élan Ballroom", "ÉLAN BALL"));
        assert!(name_matches("Café Müller", "MÜLLER"));
        assert!(!name_matches("Élan Ballroom", "elan"));
    }

    #[test]
    fn wildcards_are_literal() {
        assert!(name_matches("100% Club", "%"));
        assert!(!name_matches("Midtown Hall", "%"));
        assert!(!name_matches("Midtown Hall", "_"));
        assert!(name_matches("Midtown Hall", ""));
    }
}
