use dioxus::prelude::*;

use crate::config::TableColors;
use crate::domain::entities::dataset::{Column, SharedRow};
use crate::domain::entities::view::{PaginationSummary, SortConfig};
use crate::ui::style::{
    cell_style, header_cell_style, navigation_button_style, pagination_style, row_style,
    table_container_style, table_style, toolbar_style,
};
use crate::ui::text::{header_label, NO_DATA_LABEL};
use crate::usecase::services::view_controller::ViewController;

/// The full table: rows-per-page select, search box, sortable header, the
/// visible rows and the pagination bar. All state lives in `controller`.
#[component]
pub fn DataTable(mut controller: Signal<ViewController>, colors: TableColors) -> Element {
    let snapshot = controller.read().snapshot();
    let column_count = snapshot.columns.len().max(1);
    let td_style = cell_style();

    rsx! {
        div { style: "{toolbar_style()}",
            NumberOfEntries {
                options: snapshot.page_size_options.clone(),
                selected: snapshot.page_size,
                on_change: move |size: usize| {
                    if let Err(err) = controller.write().set_page_size(size) {
                        tracing::warn!(error = %err, "page size rejected");
                    }
                },
            }
            FilterInput {
                value: snapshot.filter.clone(),
                on_change: move |text: String| controller.write().set_filter(text),
            }
        }
        div { style: "{table_container_style()}",
            table { style: "{table_style()}",
                HeaderRow {
                    columns: snapshot.columns.clone(),
                    sort: snapshot.sort_indicator.clone(),
                    colors: colors.clone(),
                    on_sort: move |key: String| controller.write().set_sort(&key),
                }
                tbody {
                    if snapshot.visible_rows.is_empty() {
                        tr {
                            td { colspan: "{column_count}", style: "{td_style}", "{NO_DATA_LABEL}" }
                        }
                    } else {
                        for (index, row) in snapshot.visible_rows.iter().enumerate() {
                            TableRow {
                                key: "{row.id()}",
                                row: row.clone(),
                                columns: snapshot.columns.clone(),
                                index: index,
                                colors: colors.clone(),
                            }
                        }
                    }
                }
            }
        }
        div { style: "{pagination_style()}",
            NavigationButton {
                label: "◀",
                enabled: snapshot.can_go_previous,
                on_click: move |_| {
                    controller.write().go_previous();
                },
            }
            PaginationLabel { summary: snapshot.summary }
            NavigationButton {
                label: "▶",
                enabled: snapshot.can_go_next,
                on_click: move |_| {
                    controller.write().go_next();
                },
            }
        }
    }
}

#[component]
pub fn NumberOfEntries(options: Vec<usize>, selected: usize, on_change: EventHandler<usize>) -> Element {
    rsx! {
        div {
            label { r#for: "entries", style: "font-weight: 600; margin-right: 4px;", "Rows per page:" }
            select {
                id: "entries",
                style: "padding: 4px 12px; border-radius: 6px; background: #ffffff;",
                value: "{selected}",
                onchange: move |event| {
                    if let Ok(size) = event.value().parse::<usize>() {
                        on_change.call(size);
                    }
                },
                for size in options.iter() {
                    option { key: "{size}", value: "{size}", selected: *size == selected, "{size}" }
                }
            }
        }
    }
}

#[component]
pub fn FilterInput(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { r#for: "filter", style: "font-weight: 600; margin-right: 4px;", "Search:" }
            input {
                id: "filter",
                r#type: "text",
                spellcheck: "false",
                style: "padding: 4px 12px; border-radius: 6px; border: 1px solid #bbbbbb;",
                value: "{value}",
                oninput: move |event| on_change.call(event.value()),
            }
        }
    }
}

#[component]
pub fn HeaderRow(
    columns: Vec<Column>,
    sort: SortConfig,
    colors: TableColors,
    on_sort: EventHandler<String>,
) -> Element {
    let th_style = header_cell_style(&colors);
    let headers = columns
        .iter()
        .map(|column| (column.selector.clone(), header_label(column, &sort)))
        .collect::<Vec<_>>();

    rsx! {
        thead {
            tr {
                for (selector, label) in headers.into_iter() {
                    th {
                        key: "{selector}",
                        style: "{th_style}",
                        onclick: {
                            let selector = selector.clone();
                            move |_| on_sort.call(selector.clone())
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TableRow(row: SharedRow, columns: Vec<Column>, index: usize, colors: TableColors) -> Element {
    let mut hovered = use_signal(|| false);
    let tr_style = row_style(&colors, index, hovered());
    let td_style = cell_style();
    let cells = columns
        .iter()
        .map(|column| {
            let value = row
                .get(&column.selector)
                .map(|value| value.to_string())
                .unwrap_or_default();
            (column.selector.clone(), value)
        })
        .collect::<Vec<_>>();

    rsx! {
        tr {
            style: "{tr_style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            for (selector, value) in cells.into_iter() {
                td { key: "{selector}", style: "{td_style}", "{value}" }
            }
        }
    }
}

#[component]
pub fn PaginationLabel(summary: PaginationSummary) -> Element {
    rsx! {
        div { style: "font-weight: 700; margin: 0 12px;", "{summary}" }
    }
}

#[component]
pub fn NavigationButton(label: &'static str, enabled: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            style: "{navigation_button_style(enabled)}",
            disabled: !enabled,
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}
