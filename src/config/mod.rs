use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::domain::entities::view::SearchFields;

pub const CONFIG_FILE_NAME: &str = "table.toml";
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];

const FALLBACK_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PAGE_SIZE_OPTIONS[0]) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Colors handed to the presentation layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableColors {
    pub header: String,
    pub row: String,
    pub alternate_row: String,
    pub hover_row: String,
}

impl Default for TableColors {
    fn default() -> Self {
        Self {
            header: "#444444".to_string(),
            row: "#b0b0b0".to_string(),
            alternate_row: "#e7e7e7".to_string(),
            hover_row: "#6d6d6d".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size_options: Vec<usize>,
    pub default_sort_key: String,
    pub id_field: String,
    pub search: SearchFields,
    pub colors: TableColors,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_sort_key: "id".to_string(),
            id_field: "id".to_string(),
            search: SearchFields::default(),
            colors: TableColors::default(),
        }
    }
}

impl TableConfig {
    /// Loads `path` when given, otherwise the per-user config file if one
    /// exists, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "loaded table config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::Invalid(
                "page_size_options must not be empty".to_string(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid(
                "page_size_options must be greater than zero".to_string(),
            ));
        }
        for (name, value) in [
            ("default_sort_key", &self.default_sort_key),
            ("id_field", &self.id_field),
            ("search.primary", &self.search.primary),
            ("search.secondary", &self.search.secondary),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// The page size a fresh view starts with.
    pub fn initial_page_size(&self) -> NonZeroUsize {
        self.page_size_options
            .first()
            .copied()
            .and_then(NonZeroUsize::new)
            .unwrap_or(FALLBACK_PAGE_SIZE)
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "datatable", "data-table-view")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
