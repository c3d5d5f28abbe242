use std::collections::HashSet;

use crate::domain::entities::dataset::{Row, SharedRow};
use crate::domain::entities::view::SearchFields;

/// Keeps rows whose primary OR secondary search field contains `query`,
/// ignoring case.
///
/// Primary matches come first in incoming order, followed by rows that only
/// match the secondary field, also in incoming order. Rows sharing an id are
/// kept once. An empty query keeps everything.
pub fn filter_rows(rows: &[SharedRow], query: &str, fields: &SearchFields) -> Vec<SharedRow> {
    if query.is_empty() {
        return rows.to_vec();
    }

    let needle = query.to_lowercase();
    let primary = rows
        .iter()
        .filter(|row| field_contains(row, &fields.primary, &needle));
    let secondary = rows
        .iter()
        .filter(|row| field_contains(row, &fields.secondary, &needle));

    let mut seen = HashSet::new();
    primary
        .chain(secondary)
        .filter(|row| seen.insert(row.id()))
        .cloned()
        .collect()
}

fn field_contains(row: &Row, field: &str, needle: &str) -> bool {
    row.get(field)
        .map(|value| value.to_string().to_lowercase().contains(needle))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::dataset::{CellValue, RowId};

    fn person(id: i64, first: &str, last: &str) -> SharedRow {
        Arc::new(
            Row::new(RowId(id))
                .with_field("firstName", first)
                .with_field("lastName", last),
        )
    }

    fn ids(rows: &[SharedRow]) -> Vec<i64> {
        rows.iter().map(|row| row.id().0).collect()
    }

    #[test]
    fn matches_either_field_case_insensitively() {
        let rows = vec![
            person(1, "John", "Doe"),
            person(2, "Alice", "Johnson"),
            person(3, "Jane", "Smith"),
        ];

        let matched = filter_rows(&rows, "john", &SearchFields::default());

        assert_eq!(ids(&matched), vec![1, 2]);
    }

    #[test]
    fn row_matching_both_fields_appears_once() {
        let rows = vec![person(1, "Ivy", "Ivyson"), person(2, "Bob", "Brown")];

        let matched = filter_rows(&rows, "IVY", &SearchFields::default());

        assert_eq!(ids(&matched), vec![1]);
    }

    #[test]
    fn keeps_the_incoming_order() {
        let rows = vec![
            person(5, "Zed", "Irwin"),
            person(2, "Ivy", "Adams"),
            person(9, "Amy", "Wirt"),
        ];

        let matched = filter_rows(&rows, "ir", &SearchFields::default());

        assert_eq!(ids(&matched), vec![5, 9]);
    }

    #[test]
    fn primary_matches_come_before_secondary_matches() {
        let rows = vec![person(5, "Zed", "Irwin"), person(2, "Ivy", "Adams")];

        let matched = filter_rows(&rows, "i", &SearchFields::default());

        assert_eq!(ids(&matched), vec![2, 5]);
    }

    #[test]
    fn duplicate_ids_keep_the_first_match() {
        let rows = vec![
            person(1, "Ann", "Ivers"),
            person(1, "Ivy", "Stone"),
            person(3, "Iris", "Moss"),
        ];

        let matched = filter_rows(&rows, "iv", &SearchFields::default());

        assert_eq!(ids(&matched), vec![1]);
        assert_eq!(matched[0].get("firstName"), Some(&CellValue::from("Ivy")));
    }

    #[test]
    fn missing_fields_do_not_match() {
        let rows = vec![
            Arc::new(Row::new(RowId(1))),
            Arc::new(Row::new(RowId(2)).with_field("lastName", "Doe")),
        ];

        let matched = filter_rows(&rows, "doe", &SearchFields::default());

        assert_eq!(ids(&matched), vec![2]);
    }

    #[test]
    fn empty_query_is_identity() {
        let rows = vec![person(3, "Bob", "Brown"), person(1, "John", "Doe")];

        let matched = filter_rows(&rows, "", &SearchFields::default());

        assert_eq!(matched, rows);
    }

    #[test]
    fn uses_configured_fields() {
        let rows = vec![Arc::new(
            Row::new(RowId(1))
                .with_field("firstName", "John")
                .with_field("city", "Paris"),
        )];
        let fields = SearchFields {
            primary: "city".to_string(),
            secondary: "country".to_string(),
        };

        assert_eq!(ids(&filter_rows(&rows, "par", &fields)), vec![1]);
        assert!(filter_rows(&rows, "john", &fields).is_empty());
    }
}
