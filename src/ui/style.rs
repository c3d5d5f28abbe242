use crate::config::TableColors;

pub fn root_container_style() -> String {
    "height: 100vh; display: flex; flex-direction: column; padding: 12px; box-sizing: border-box; font-family: Avenir, Helvetica, Arial, sans-serif;"
        .to_string()
}

pub fn toolbar_style() -> String {
    "display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: space-between; align-items: center; gap: 12px;"
        .to_string()
}

pub fn table_container_style() -> String {
    "flex: 1; min-height: 0; overflow: auto; margin: 12px 0;".to_string()
}

pub fn table_style() -> String {
    "width: 100%; border-collapse: collapse; border: 1px solid #000000; text-align: center;"
        .to_string()
}

pub fn header_cell_style(colors: &TableColors) -> String {
    format!(
        "position: sticky; top: 0; border: 1px solid #000000; background: {}; color: #ffffff; padding: 8px; cursor: pointer; user-select: none;",
        colors.header
    )
}

/// Even rows use the row color, odd rows the alternate one; a hovered row
/// uses the hover color.
pub fn row_style(colors: &TableColors, index: usize, hovered: bool) -> String {
    let background = if hovered {
        &colors.hover_row
    } else if index % 2 == 0 {
        &colors.row
    } else {
        &colors.alternate_row
    };
    format!("border: 1px solid #000000; background: {background};")
}

pub fn cell_style() -> String {
    "border: 1px solid #000000; padding: 8px;".to_string()
}

pub fn pagination_style() -> String {
    "display: flex; flex-direction: row; justify-content: center; align-items: center; gap: 12px;"
        .to_string()
}

pub fn navigation_button_style(enabled: bool) -> String {
    let cursor = if enabled { "pointer" } else { "default" };
    let opacity = if enabled { "1" } else { "0.4" };
    format!(
        "padding: 8px 12px; border: none; border-radius: 9999px; background: #ffffff; box-shadow: 5px 5px 5px 0px rgba(0, 0, 0, 0.2); cursor: {cursor}; opacity: {opacity};"
    )
}
