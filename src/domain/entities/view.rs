use std::fmt;
use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::domain::entities::dataset::SharedRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// The config a header click on `key` produces: the same key flips
    /// direction, any other key starts ascending.
    pub fn clicked(&self, key: &str) -> Self {
        if self.key == key {
            Self {
                key: self.key.clone(),
                direction: self.direction.toggled(),
            }
        } else {
            Self::ascending(key)
        }
    }
}

/// The two fields the free-text filter looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchFields {
    pub primary: String,
    pub secondary: String,
}

impl Default for SearchFields {
    fn default() -> Self {
        Self {
            primary: "firstName".to_string(),
            secondary: "lastName".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_size: NonZeroUsize,
    pub first_index: usize,
}

impl PageWindow {
    pub fn new(page_size: NonZeroUsize, first_index: usize) -> Self {
        Self {
            page_size,
            first_index,
        }
    }

    pub fn first_page(page_size: NonZeroUsize) -> Self {
        Self::new(page_size, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationSummary {
    /// Nothing to show.
    Empty,
    /// The offset points past the end of the rows.
    InvalidRange { first_shown: usize, total: usize },
    Range {
        first_shown: usize,
        last_shown: usize,
        total: usize,
    },
}

impl fmt::Display for PaginationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationSummary::Empty => f.write_str("0 of 0"),
            PaginationSummary::InvalidRange { .. } => f.write_str("Invalid range"),
            PaginationSummary::Range {
                first_shown,
                last_shown,
                total,
            } => write!(f, "{first_shown}-{last_shown} of {total}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub visible: Vec<SharedRow>,
    pub summary: PaginationSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_same_key_toggles_direction() {
        let config = SortConfig::ascending("firstName");

        let once = config.clicked("firstName");
        let twice = once.clicked("firstName");

        assert_eq!(once.key, "firstName");
        assert_eq!(once.direction, SortDirection::Descending);
        assert_eq!(twice.direction, SortDirection::Ascending);
    }

    #[test]
    fn clicking_another_key_resets_to_ascending() {
        let config = SortConfig {
            key: "firstName".to_string(),
            direction: SortDirection::Descending,
        };

        let next = config.clicked("lastName");

        assert_eq!(next, SortConfig::ascending("lastName"));
    }

    #[test]
    fn summary_display_matches_labels() {
        let range = PaginationSummary::Range {
            first_shown: 11,
            last_shown: 12,
            total: 12,
        };
        let invalid = PaginationSummary::InvalidRange {
            first_shown: 111,
            total: 100,
        };

        assert_eq!(range.to_string(), "11-12 of 12");
        assert_eq!(invalid.to_string(), "Invalid range");
        assert_eq!(PaginationSummary::Empty.to_string(), "0 of 0");
    }
}
