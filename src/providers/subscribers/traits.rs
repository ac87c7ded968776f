//! Subscriber directory trait definition.

use async_trait::async_trait;

use crate::domain::Subscriber;

/// Errors that can occur while loading the subscriber list.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The backing store could not be read.
    #[error("failed to read subscriber list: {0}")]
    Io(#[from] std::io::Error),

    /// The stored list could not be decoded as subscriber records.
    #[error("malformed subscriber list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Trait for subscriber list storage.
#[async_trait]
pub trait SubscriberDirectory: Send + Sync {
    /// Returns the current subscriber list.
    async fn list(&self) -> Result<Vec<Subscriber>, DirectoryError>;
}
