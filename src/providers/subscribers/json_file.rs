//! JSON file subscriber directory.
//!
//! Reads subscriber records from a JSON array on disk, one object per
//! subscriber with `week_day`, `ordering`, and `email` fields.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{DirectoryError, SubscriberDirectory};
use crate::domain::Subscriber;

/// [`SubscriberDirectory`] backed by a JSON file.
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    /// Creates a directory reading from the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SubscriberDirectory for JsonFileDirectory {
    async fn list(&self) -> Result<Vec<Subscriber>, DirectoryError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}
