//! Article domain types.
//!
//! An [`Article`] is one piece of content in a digest. A batch of articles
//! is fetched once per run and shared read-only across every subscriber's
//! rendering; orderings always operate on a copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an article, assigned by the content source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub String);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A single news article.
///
/// Immutable once fetched; the per-run batch is shared read-only across all
/// subscriber renderings within that run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Identifier assigned by the content source.
    pub id: ArticleId,
    /// Article headline.
    pub title: String,
    /// Canonical URL of the article.
    pub url: String,
    /// URL of the header image.
    pub image_url: String,
    /// Name of the site that published the article.
    pub news_site: String,
    /// Short summary of the article content.
    pub summary: String,
    /// When the article was first published.
    pub published_at: DateTime<Utc>,
    /// When the article was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether the source marked the article as featured.
    pub featured: bool,
    /// Identifiers of launches this article relates to.
    pub launches: Vec<String>,
    /// Identifiers of events this article relates to.
    pub events: Vec<String>,
}
