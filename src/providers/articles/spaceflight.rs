//! Spaceflight News API content source.
//!
//! Fetches the current article batch from the Spaceflight News API v2
//! `/articles` endpoint. The wire format uses camelCase field names which
//! are mapped onto the crate's [`Article`] type here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ArticleSource, SourceError};
use crate::domain::{Article, ArticleId};

/// Default endpoint for the Spaceflight News API v2 article list.
pub const DEFAULT_ENDPOINT: &str = "https://spaceflightnewsapi.net/api/v2/articles";

/// An article record as returned by the Spaceflight News API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireArticle {
    id: String,
    title: String,
    url: String,
    image_url: String,
    news_site: String,
    summary: String,
    published_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    featured: bool,
    #[serde(default)]
    launches: Vec<String>,
    #[serde(default)]
    events: Vec<String>,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Self {
            id: ArticleId(wire.id),
            title: wire.title,
            url: wire.url,
            image_url: wire.image_url,
            news_site: wire.news_site,
            summary: wire.summary,
            published_at: wire.published_at,
            updated_at: wire.updated_at,
            featured: wire.featured,
            launches: wire.launches,
            events: wire.events,
        }
    }
}

/// [`ArticleSource`] backed by the Spaceflight News API.
pub struct SpaceflightNewsSource {
    client: reqwest::Client,
    endpoint: String,
}

impl SpaceflightNewsSource {
    /// Creates a source for the given endpoint with a default HTTP client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a source using a caller-provided HTTP client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl Default for SpaceflightNewsSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl ArticleSource for SpaceflightNewsSource {
    async fn fetch(&self) -> Result<Vec<Article>, SourceError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus(status.as_u16()));
        }

        let wire: Vec<WireArticle> = response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))?;

        Ok(wire.into_iter().map(Article::from).collect())
    }
}
