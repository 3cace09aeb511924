//! One JSON array file holding every record of an aggregate type

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::ports::outbound::RepositoryError;

#[derive(Debug, Clone)]
pub struct JsonCollection {
    name: String,
    path: PathBuf,
}

impl JsonCollection {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the file.
    ///
    /// A missing, empty or malformed file yields no records. Records that do
    /// not decode are skipped one by one.
    pub async fn load<R: DeserializeOwned>(&self) -> Vec<R> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(collection = %self.name, path = %self.path.display(), "Collection file missing, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(collection = %self.name, error = %e, "Failed to read collection file, starting empty");
                return Vec::new();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            warn!(collection = %self.name, "Collection file empty, starting empty");
            return Vec::new();
        }

        let values: Vec<serde_json::Value> = match serde_json::from_slice(&bytes) {
            Ok(values) => values,
            Err(e) => {
                warn!(collection = %self.name, error = %e, "Malformed collection file, starting empty");
                return Vec::new();
            }
        };

        let total = values.len();
        let records: Vec<R> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(collection = %self.name, index, error = %e, "Skipping malformed record");
                    None
                }
            })
            .collect();

        debug!(collection = %self.name, loaded = records.len(), total, "Collection loaded");
        records
    }

    /// Replace the file contents with `records`, through a temporary file
    pub async fn write<R: Serialize>(&self, records: &[R]) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| RepositoryError::Serialization(format!("{}: {}", self.name, e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.storage_error(e))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| self.storage_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.storage_error(e))?;

        debug!(collection = %self.name, count = records.len(), "Collection written");
        Ok(())
    }

    /// Delete the file; a missing file is fine
    pub async fn remove(&self) -> Result<(), RepositoryError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(e)),
        }
    }

    fn storage_error(&self, err: std::io::Error) -> RepositoryError {
        RepositoryError::Storage(format!("{} ({}): {}", self.name, self.path.display(), err))
    }
}
