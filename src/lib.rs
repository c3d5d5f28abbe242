//! Client-side sorting, filtering and pagination for tabular data.
//!
//! [`ViewController`] owns the view state of one table and recomputes the
//! visible page through the sort, filter and paginate stages of
//! [`usecase::pipeline`] on every change. Presentation lives in [`ui`]: a
//! plain-text renderer and Dioxus components.

#[cfg(feature = "desktop")]
pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod usecase;

pub use config::TableConfig;
pub use domain::entities::dataset::{CellValue, Column, Dataset, Row, RowId, SharedRow};
pub use domain::entities::view::{
    Page, PageWindow, PaginationSummary, SearchFields, SortConfig, SortDirection, ViewError,
};
pub use usecase::services::view_controller::{ViewController, ViewEvent, ViewSnapshot};
