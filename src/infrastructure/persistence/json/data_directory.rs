//! Data directory - Where the JSON collection files live

use std::path::{Path, PathBuf};

use tracing::info;

use crate::application::ports::outbound::RepositoryError;
use crate::infrastructure::persistence::json::collection::JsonCollection;

pub const ROOMS: &str = "rooms";
pub const OFFICERS: &str = "officers";
pub const DETAINEES: &str = "detainees";
pub const INTERROGATIONS: &str = "interrogations";
pub const MEETINGS: &str = "meetings";

/// Every collection, independent ones first
pub const COLLECTIONS: [&str; 5] = [ROOMS, OFFICERS, DETAINEES, INTERROGATIONS, MEETINGS];

#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_exists(&self) -> Result<(), RepositoryError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            RepositoryError::Storage(format!(
                "Cannot create data directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// The collection stored in `<root>/<name>.json`
    pub fn collection(&self, name: &str) -> JsonCollection {
        JsonCollection::new(name, self.root.join(format!("{}.json", name)))
    }

    /// Overwrite every collection file with an empty array
    pub async fn reset(&self) -> Result<(), RepositoryError> {
        self.ensure_exists().await?;
        for name in COLLECTIONS {
            self.collection(name)
                .write::<serde_json::Value>(&[])
                .await?;
        }
        info!(path = %self.root.display(), "Data directory reset");
        Ok(())
    }

    /// Delete every collection file
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        for name in COLLECTIONS {
            self.collection(name).remove().await?;
        }
        info!(path = %self.root.display(), "Data directory cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reset_writes_empty_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDirectory::new(dir.path().join("data"));

        data.reset().await.unwrap();

        for name in COLLECTIONS {
            let path = data.root().join(format!("{}.json", name));
            let contents = std::fs::read_to_string(path).unwrap();
            assert_eq!(contents.trim(), "[]");
        }
    }

    #[tokio::test]
    async fn test_clear_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDirectory::new(dir.path());
        data.reset().await.unwrap();

        data.clear().await.unwrap();

        assert!(!data.collection(ROOMS).path().exists());
        data.clear().await.unwrap();
    }
}
