use crate::domain::entities::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("{0}")]
    Message(String),
}

/// Anything a table can be filled from.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Dataset, SourceError>;

    /// Human readable origin, used in logs and window titles.
    fn describe(&self) -> String;
}
