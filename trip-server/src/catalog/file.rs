//! File-backed catalog for running without a backend.
//!
//! Reads the same JSON shapes the backend serves, so a saved backend
//! response can be dropped in as-is.

use std::path::{Path, PathBuf};

use super::CatalogSource;
use super::client::parse_catalog;
use super::error::CatalogError;
use super::types::TripDto;

/// Catalog source that reads trips from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    async fn fetch_trips(&self) -> Result<Vec<TripDto>, CatalogError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        parse_catalog(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
