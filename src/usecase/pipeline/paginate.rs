use crate::domain::entities::dataset::SharedRow;
use crate::domain::entities::view::{Page, PageWindow, PaginationSummary};

pub fn paginate(rows: &[SharedRow], window: &PageWindow) -> Page {
    let total = rows.len();
    let start = window.first_index.min(total);
    let end = window
        .first_index
        .saturating_add(window.page_size.get())
        .min(total);

    Page {
        visible: rows[start..end].to_vec(),
        summary: summarize(window, total),
    }
}

pub fn summarize(window: &PageWindow, total: usize) -> PaginationSummary {
    if total == 0 {
        return PaginationSummary::Empty;
    }

    let first_shown = window.first_index.saturating_add(1);
    if first_shown > total {
        return PaginationSummary::InvalidRange { first_shown, total };
    }

    PaginationSummary::Range {
        first_shown,
        last_shown: window
            .first_index
            .saturating_add(window.page_size.get())
            .min(total),
        total,
    }
}

/// Offset after a "next" click, or `None` once the current page is the
/// last one.
pub fn next_offset(window: &PageWindow, total: usize) -> Option<usize> {
    let next = window.first_index.checked_add(window.page_size.get())?;
    (next < total).then_some(next)
}

/// Offset after a "previous" click, or `None` on the first page.
pub fn previous_offset(window: &PageWindow) -> Option<usize> {
    window.first_index.checked_sub(window.page_size.get())
}
