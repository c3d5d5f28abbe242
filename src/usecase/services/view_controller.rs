use std::num::NonZeroUsize;

use tracing::debug;

use crate::config::TableConfig;
use crate::domain::entities::dataset::{Column, Dataset, SharedRow};
use crate::domain::entities::view::{
    Page, PageWindow, PaginationSummary, SearchFields, SortConfig, ViewError,
};
use crate::usecase::pipeline::{next_offset, paginate, previous_offset, sort_and_filter};

/// Events the presentation layer feeds into a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SortRequested(String),
    FilterChanged(String),
    PageSizeChanged(usize),
    NextRequested,
    PreviousRequested,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub columns: Vec<Column>,
    pub visible_rows: Vec<SharedRow>,
    pub summary: PaginationSummary,
    pub sort_indicator: SortConfig,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub filter: String,
    pub can_go_next: bool,
    pub can_go_previous: bool,
}

/// Owns the view state of one table and recomputes the visible page
/// synchronously after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    dataset: Dataset,
    search_fields: SearchFields,
    page_size_options: Vec<usize>,
    sort: SortConfig,
    filter: String,
    page_size: NonZeroUsize,
    first_index: usize,
    filtered_sorted: Vec<SharedRow>,
    page: Page,
}

impl ViewController {
    pub fn new(config: &TableConfig, dataset: Dataset) -> Self {
        let page_size = config.initial_page_size();
        let mut controller = Self {
            dataset,
            search_fields: config.search.clone(),
            page_size_options: config.page_size_options.clone(),
            sort: SortConfig::ascending(config.default_sort_key.as_str()),
            filter: String::new(),
            page_size,
            first_index: 0,
            filtered_sorted: Vec::new(),
            page: Page {
                visible: Vec::new(),
                summary: PaginationSummary::Empty,
            },
        };
        controller.recompute();
        controller
    }

    pub fn handle(&mut self, event: ViewEvent) -> Result<(), ViewError> {
        match event {
            ViewEvent::SortRequested(key) => self.set_sort(&key),
            ViewEvent::FilterChanged(query) => self.set_filter(query),
            ViewEvent::PageSizeChanged(size) => self.set_page_size(size)?,
            ViewEvent::NextRequested => {
                self.go_next();
            }
            ViewEvent::PreviousRequested => {
                self.go_previous();
            }
        }
        Ok(())
    }

    pub fn set_sort(&mut self, key: &str) {
        self.sort = self.sort.clicked(key);
        debug!(key = %self.sort.key, direction = ?self.sort.direction, "sort changed");
        self.first_index = 0;
        self.recompute();
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
        debug!(filter = %self.filter, "filter changed");
        self.first_index = 0;
        self.recompute();
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<(), ViewError> {
        let size = NonZeroUsize::new(size).ok_or(ViewError::ZeroPageSize)?;
        self.page_size = size;
        debug!(page_size = size.get(), "page size changed");
        self.first_index = 0;
        self.recompute();
        Ok(())
    }

    /// Moves one page forward. Returns `false` on the last page.
    pub fn go_next(&mut self) -> bool {
        match next_offset(&self.window(), self.filtered_sorted.len()) {
            Some(offset) => {
                self.first_index = offset;
                debug!(first_index = offset, "moved to next page");
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Moves one page back. Returns `false` on the first page.
    pub fn go_previous(&mut self) -> bool {
        match previous_offset(&self.window()) {
            Some(offset) => {
                self.first_index = offset;
                debug!(first_index = offset, "moved to previous page");
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Replaces the underlying dataset. The current offset survives only if
    /// it still points at a row of the new filtered sequence.
    pub fn set_data(&mut self, dataset: Dataset) {
        debug!(
            rows = dataset.rows.len(),
            columns = dataset.columns.len(),
            "dataset replaced"
        );
        self.dataset = dataset;
        self.recompute();
        if self.first_index > 0 && self.first_index >= self.filtered_sorted.len() {
            self.first_index = 0;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.filtered_sorted = sort_and_filter(
            &self.dataset.rows,
            &self.sort,
            &self.filter,
            &self.search_fields,
        );
        self.page = paginate(&self.filtered_sorted, &self.window());
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page_size, self.first_index)
    }

    pub fn columns(&self) -> &[Column] {
        &self.dataset.columns
    }

    pub fn data(&self) -> &Dataset {
        &self.dataset
    }

    pub fn visible_rows(&self) -> &[SharedRow] {
        &self.page.visible
    }

    pub fn summary(&self) -> PaginationSummary {
        self.page.summary
    }

    pub fn sort_indicator(&self) -> &SortConfig {
        &self.sort
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn first_index(&self) -> usize {
        self.first_index
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_sorted.len()
    }

    pub fn can_go_next(&self) -> bool {
        next_offset(&self.window(), self.filtered_sorted.len()).is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        previous_offset(&self.window()).is_some()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            columns: self.dataset.columns.clone(),
            visible_rows: self.page.visible.clone(),
            summary: self.page.summary,
            sort_indicator: self.sort.clone(),
            page_size: self.page_size.get(),
            page_size_options: self.page_size_options.clone(),
            filter: self.filter.clone(),
            can_go_next: self.can_go_next(),
            can_go_previous: self.can_go_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dataset::{Column, Row, RowId};
    use crate::domain::entities::view::SortDirection;

    fn numbered(count: i64) -> Dataset {
        Dataset::new(
            vec![Column::new("ID", "id")],
            (1..=count)
                .map(|id| {
                    Row::new(RowId(id))
                        .with_field("id", id)
                        .with_field("firstName", format!("First{id}"))
                        .with_field("lastName", format!("Last{id}"))
                })
                .collect(),
        )
    }

    #[test]
    fn starts_on_first_page_with_default_sort() {
        let view = ViewController::new(&TableConfig::default(), numbered(3));

        assert_eq!(view.page_size(), 10);
        assert_eq!(view.first_index(), 0);
        assert_eq!(view.sort_indicator(), &SortConfig::ascending("id"));
        assert_eq!(view.filter(), "");
        assert_eq!(view.visible_rows().len(), 3);
    }

    #[test]
    fn sort_filter_and_page_size_reset_the_offset() {
        let mut view = ViewController::new(&TableConfig::default(), numbered(40));

        assert!(view.go_next());
        view.set_sort("id");
        assert_eq!(view.first_index(), 0);

        assert!(view.go_next());
        view.set_filter("First");
        assert_eq!(view.first_index(), 0);

        assert!(view.go_next());
        view.set_page_size(15).expect("page size should be accepted");
        assert_eq!(view.first_index(), 0);
        assert_eq!(view.summary().to_string(), "1-15 of 40");
    }

    #[test]
    fn zero_page_size_is_rejected_without_side_effects() {
        let mut view = ViewController::new(&TableConfig::default(), numbered(40));
        assert!(view.go_next());

        let result = view.set_page_size(0);

        assert_eq!(result, Err(ViewError::ZeroPageSize));
        assert_eq!(view.page_size(), 10);
        assert_eq!(view.first_index(), 10);
    }

    #[test]
    fn next_is_checked_against_the_filtered_length() {
        let mut view = ViewController::new(&TableConfig::default(), numbered(40));
        view.set_filter("First1");

        // First1 and First10..First19
        assert_eq!(view.filtered_len(), 11);
        assert!(view.go_next());
        assert_eq!(view.visible_rows().len(), 1);
        assert!(!view.go_next());
        assert_eq!(view.first_index(), 10);
    }

    #[test]
    fn events_dispatch_to_operations() {
        let mut view = ViewController::new(&TableConfig::default(), numbered(25));

        view.handle(ViewEvent::SortRequested("id".to_string()))
            .expect("sort event should apply");
        assert_eq!(view.sort_indicator().direction, SortDirection::Descending);
        assert_eq!(view.visible_rows()[0].id(), RowId(25));

        view.handle(ViewEvent::NextRequested)
            .expect("next event should apply");
        assert_eq!(view.summary().to_string(), "11-20 of 25");

        view.handle(ViewEvent::PreviousRequested)
            .expect("previous event should apply");
        assert_eq!(view.first_index(), 0);

        view.handle(ViewEvent::FilterChanged("last2".to_string()))
            .expect("filter event should apply");
        assert_eq!(view.filtered_len(), 7);

        assert_eq!(
            view.handle(ViewEvent::PageSizeChanged(0)),
            Err(ViewError::ZeroPageSize)
        );
    }

    #[test]
    fn replacing_data_keeps_a_valid_offset() {
        let mut view = ViewController::new(&TableConfig::default(), numbered(30));
        assert!(view.go_next());

        view.set_data(numbered(25));
        assert_eq!(view.first_index(), 10);
        assert_eq!(view.summary().to_string(), "11-20 of 25");

        view.set_data(numbered(5));
        assert_eq!(view.first_index(), 0);
        assert_eq!(view.summary().to_string(), "1-5 of 5");
    }

    #[test]
    fn snapshot_reflects_navigation_state() {
        let mut view = ViewController::new(&TableConfig::default(), numbered(12));

        let first = view.snapshot();
        assert!(first.can_go_next);
        assert!(!first.can_go_previous);
        assert_eq!(first.page_size_options, vec![10, 15, 20, 25, 30]);

        view.go_next();
        let second = view.snapshot();
        assert!(!second.can_go_next);
        assert!(second.can_go_previous);
        assert_eq!(second.visible_rows.len(), 2);
    }
}
