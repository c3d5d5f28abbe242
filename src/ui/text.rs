use std::fmt::Write;

use crate::domain::entities::dataset::Column;
use crate::domain::entities::view::{SortConfig, SortDirection};
use crate::usecase::services::view_controller::ViewSnapshot;

pub const NO_DATA_LABEL: &str = "No data available in table";

pub fn sort_marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

pub fn header_label(column: &Column, sort: &SortConfig) -> String {
    if column.selector == sort.key {
        format!("{} {}", column.name, sort_marker(sort.direction))
    } else {
        column.name.clone()
    }
}

/// Renders the visible page as an aligned plain-text table followed by the
/// pagination summary.
pub fn render_page(snapshot: &ViewSnapshot) -> String {
    let headers = snapshot
        .columns
        .iter()
        .map(|column| header_label(column, &snapshot.sort_indicator))
        .collect::<Vec<_>>();
    let cells = snapshot
        .visible_rows
        .iter()
        .map(|row| {
            snapshot
                .columns
                .iter()
                .map(|column| {
                    row.get(&column.selector)
                        .map(|value| value.to_string())
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&rule);
    out.push('\n');

    if cells.is_empty() {
        out.push_str(NO_DATA_LABEL);
        out.push('\n');
    } else {
        for row in &cells {
            push_line(&mut out, row, &widths);
        }
    }

    let _ = writeln!(out, "{}", snapshot.summary);
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    // Trailing blank cells are dropped so the line ends at the last value.
    let used = cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |idx| idx + 1);
    let line = cells[..used]
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
