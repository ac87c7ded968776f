//! Content source trait definition.

use async_trait::async_trait;

use crate::domain::Article;

/// Errors that can occur while fetching the article batch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network-level error (DNS, connection, TLS, timeout).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The source answered with a non-success status code.
    #[error("unexpected status: {0}")]
    HttpStatus(u16),

    /// The response body could not be decoded as an article list.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Trait for remote content sources.
///
/// A source returns the current batch of articles. It carries no pipeline
/// logic; ordering and rendering happen downstream on an immutable copy of
/// the returned batch.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetches the current article batch.
    async fn fetch(&self) -> Result<Vec<Article>, SourceError>;
}
