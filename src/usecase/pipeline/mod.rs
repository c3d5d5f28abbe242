//! The view pipeline: sort, then filter, then paginate.
//!
//! Every stage is a pure function over shared rows. Stages never mutate
//! their input and never fail; degraded inputs produce defined outputs.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::filter_rows;
pub use paginate::{next_offset, paginate, previous_offset, summarize};
pub use sort::sort_rows;

use crate::domain::entities::dataset::SharedRow;
use crate::domain::entities::view::{SearchFields, SortConfig};

/// Runs the first two stages, producing the sequence pagination works on.
pub fn sort_and_filter(
    rows: &[SharedRow],
    sort: &SortConfig,
    query: &str,
    fields: &SearchFields,
) -> Vec<SharedRow> {
    let sorted = sort_rows(rows, sort);
    filter_rows(&sorted, query, fields)
}
