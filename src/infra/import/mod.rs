pub mod csv;
pub mod xlsx;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};

use crate::domain::entities::dataset::{CellValue, Column, Dataset, Row, RowId};
use crate::usecase::ports::source::{DatasetSource, SourceError};

use self::csv::CsvSource;
use self::xlsx::XlsxSource;

/// Picks a source for `path` by extension.
pub fn open_source(
    path: &Path,
    sheet: Option<String>,
    id_field: &str,
) -> Result<Arc<dyn DatasetSource>, SourceError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(Arc::new(CsvSource::new(path, id_field))),
        "xlsx" | "xlsm" | "xls" | "ods" => Ok(Arc::new(XlsxSource::new(path, sheet, id_field))),
        _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Turns a header and raw string records into a dataset.
///
/// When `id_field` is one of the headers its values become the row ids and
/// must be unique integers. Otherwise ids are numbered from 1 and stored
/// under `id_field`.
pub fn build_dataset<I>(headers: Vec<String>, records: I, id_field: &str) -> Result<Dataset>
where
    I: IntoIterator<Item = Result<Vec<String>>>,
{
    if headers.is_empty() {
        bail!("a header row is required")
    }

    let id_col = headers.iter().position(|header| header == id_field);
    let columns = headers
        .iter()
        .map(|header| Column::new(header.as_str(), header.as_str()))
        .collect::<Vec<_>>();

    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    for (row_idx, record) in records.into_iter().enumerate() {
        let record = record?;
        let line = row_idx + 1;

        let id = match id_col {
            Some(col) => {
                let raw = record.get(col).map(String::as_str).unwrap_or("");
                match CellValue::infer(raw) {
                    CellValue::Integer(value) => RowId(value),
                    _ => bail!("row {line}: {id_field} must be an integer, got {raw:?}"),
                }
            }
            None => RowId(line as i64),
        };
        if !seen.insert(id) {
            bail!("row {line}: duplicate {id_field} {id}")
        }

        let mut row = Row::new(id);
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.as_str(), CellValue::infer(value));
        }
        if id_col.is_none() {
            row.insert(id_field, CellValue::Integer(id.0));
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}
