use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::dataset::Dataset;
use crate::infra::import::build_dataset;
use crate::usecase::ports::source::{DatasetSource, SourceError};

pub fn read_csv_dataset(csv_path: &Path, id_field: &str) -> Result<Dataset> {
    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let records = reader.records().map(|record| {
        record
            .map(|record| record.iter().map(str::to_string).collect::<Vec<_>>())
            .context("failed to parse csv record")
    });

    build_dataset(headers, records, id_field)
        .with_context(|| format!("failed to load csv: {}", csv_path.display()))
}

pub struct CsvSource {
    path: PathBuf,
    id_field: String,
}

impl CsvSource {
    pub fn new(path: &Path, id_field: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            id_field: id_field.to_string(),
        }
    }
}

impl DatasetSource for CsvSource {
    fn load(&self) -> Result<Dataset, SourceError> {
        read_csv_dataset(&self.path, &self.id_field)
            .map_err(|err| SourceError::Message(format!("{err:#}")))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
