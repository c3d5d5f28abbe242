use std::sync::Arc;

use tracing::info;

use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::{DatasetSource, SourceError};

pub struct LoadService {
    source: Arc<dyn DatasetSource>,
}

impl LoadService {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    pub fn load(&self) -> Result<Dataset, SourceError> {
        let dataset = self.source.load()?;
        info!(
            source = %self.source.describe(),
            rows = dataset.len(),
            columns = dataset.columns.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }
}
