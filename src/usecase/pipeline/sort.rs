use std::cmp::Ordering;

use crate::domain::entities::dataset::SharedRow;
use crate::domain::entities::view::{SortConfig, SortDirection};

/// Orders rows by a single key. Stable; rows without the key go last in
/// either direction.
pub fn sort_rows(rows: &[SharedRow], config: &SortConfig) -> Vec<SharedRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        match (a.get(&config.key), b.get(&config.key)) {
            (Some(a), Some(b)) => {
                let ordering = a.native_cmp(b);
                match config.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::dataset::{Row, RowId};

    fn person(id: i64, first: &str) -> SharedRow {
        Arc::new(Row::new(RowId(id)).with_field("id", id).with_field("firstName", first))
    }

    fn ids(rows: &[SharedRow]) -> Vec<i64> {
        rows.iter().map(|row| row.id().0).collect()
    }

    #[test]
    fn sorts_text_ascending_and_descending() {
        let rows = vec![person(1, "John"), person(2, "Alice"), person(3, "Bob")];

        let asc = sort_rows(&rows, &SortConfig::ascending("firstName"));
        let desc = sort_rows(
            &rows,
            &SortConfig {
                key: "firstName".to_string(),
                direction: SortDirection::Descending,
            },
        );

        assert_eq!(ids(&asc), vec![2, 3, 1]);
        assert_eq!(ids(&desc), vec![1, 3, 2]);
        assert_eq!(ids(&rows), vec![1, 2, 3], "input must stay untouched");
    }

    #[test]
    fn sorts_numbers_numerically() {
        let rows = vec![person(10, "a"), person(9, "b"), person(100, "c")];

        let asc = sort_rows(&rows, &SortConfig::ascending("id"));

        assert_eq!(ids(&asc), vec![9, 10, 100]);
    }

    #[test]
    fn rows_missing_the_key_go_last_in_both_directions() {
        let bare = Arc::new(Row::new(RowId(4)));
        let rows = vec![bare, person(2, "Zed"), person(3, "Amy")];

        let asc = sort_rows(&rows, &SortConfig::ascending("firstName"));
        let desc = sort_rows(
            &rows,
            &SortConfig {
                key: "firstName".to_string(),
                direction: SortDirection::Descending,
            },
        );

        assert_eq!(ids(&asc), vec![3, 2, 4]);
        assert_eq!(ids(&desc), vec![2, 3, 4]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = vec![person(11, "Ivy"), person(12, "Ivy"), person(1, "Amy")];

        let asc = sort_rows(&rows, &SortConfig::ascending("firstName"));

        assert_eq!(ids(&asc), vec![1, 11, 12]);
    }
}
