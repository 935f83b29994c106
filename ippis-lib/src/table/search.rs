//! Free-text search.

use crate::model::Row;

/// Returns `true` if any searchable value of `row` contains the term.
///
/// `lowered_term` must already be lowercased. An empty term matches every
/// row. Numbers and dates are matched through their display form.
pub fn matches_search<T: Row>(row: &T, lowered_term: &str) -> bool {
    if lowered_term.is_empty() {
        return true;
    }
    row.values()
        .iter()
        .filter(|value| value.is_searchable())
        .any(|value| value.to_string().to_lowercase().contains(lowered_term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn asset() -> Record {
        Record::new("AST-004")
            .set("name", "HP LaserJet Pro")
            .set("serialNumber", "SN-88231")
            .set("assignedTo", "Ngozi Okafor")
            .set("units", 3i64)
            .set("active", true)
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(matches_search(&asset(), ""));
    }

    #[test]
    fn test_substring_any_field() {
        assert!(matches_search(&asset(), "laserjet"));
        assert!(matches_search(&asset(), "okafor"));
        assert!(matches_search(&asset(), "88231"));
    }

    #[test]
    fn test_id_is_searched() {
        assert!(matches_search(&asset(), "ast-004"));
    }

    #[test]
    fn test_numbers_are_stringified() {
        let row = Record::new(1).set("units", 1450i64);
        assert!(matches_search(&row, "145"));
    }

    #[test]
    fn test_booleans_are_not_searched() {
        let row = Record::new("x").set("active", true);
        assert!(!matches_search(&row, "true"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_search(&asset(), "zzz-not-present"));
    }
}
