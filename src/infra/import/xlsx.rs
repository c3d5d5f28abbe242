use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::dataset::Dataset;
use crate::infra::import::build_dataset;
use crate::usecase::ports::source::{DatasetSource, SourceError};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads `sheet`, or the first sheet of the workbook. The first row is the
/// header; fully empty rows are skipped.
pub fn read_xlsx_dataset(xlsx_path: &Path, sheet: Option<&str>, id_field: &str) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open workbook: {}", xlsx_path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("workbook has no sheets: {}", xlsx_path.display()))?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<_>>())
        .filter(|r| r.iter().any(|value| !value.trim().is_empty()));
    let headers = rows
        .next()
        .ok_or_else(|| anyhow!("sheet {sheet_name} has no header row"))?;

    build_dataset(headers, rows.map(Ok), id_field)
        .with_context(|| format!("failed to load sheet: {sheet_name}"))
}

pub struct XlsxSource {
    path: PathBuf,
    sheet: Option<String>,
    id_field: String,
}

impl XlsxSource {
    pub fn new(path: &Path, sheet: Option<String>, id_field: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            sheet,
            id_field: id_field.to_string(),
        }
    }
}

impl DatasetSource for XlsxSource {
    fn load(&self) -> Result<Dataset, SourceError> {
        read_xlsx_dataset(&self.path, self.sheet.as_deref(), &self.id_field)
            .map_err(|err| SourceError::Message(format!("{err:#}")))
    }

    fn describe(&self) -> String {
        match &self.sheet {
            Some(sheet) => format!("{}#{sheet}", self.path.display()),
            None => self.path.display().to_string(),
        }
    }
}
