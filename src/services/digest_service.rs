//! Digest run orchestration.
//!
//! [`DigestService`] ties one run together: fetch the article batch once,
//! load the subscriber list once, compute the current weekday once, then
//! walk the subscribers applying eligibility, ordering, rendering, and
//! delivery. Fetch and load failures are fatal; a delivery failure is
//! recorded against that subscriber and the loop keeps going.

use chrono::{Datelike, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, warn};

use crate::domain::{DigestRunSummary, SubscriberFailure};
use crate::providers::articles::{ArticleSource, SourceError};
use crate::providers::delivery::Deliverer;
use crate::providers::subscribers::{DirectoryError, SubscriberDirectory};
use crate::services::eligibility::{is_eligible, weekday_number};
use crate::services::ordering::order;
use crate::services::renderer::render;

/// Fatal errors that abort a digest run before any summary is produced.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// The content source could not produce an article batch.
    #[error("failed to fetch articles: {0}")]
    Fetch(#[from] SourceError),

    /// The subscriber list could not be loaded.
    #[error("failed to load subscriber list: {0}")]
    Directory(#[from] DirectoryError),
}

/// Orchestrates one full digest run.
///
/// Generic over the three I/O boundaries so tests can substitute mock
/// providers. The service holds no state across runs; every run fetches
/// and loads afresh and there is no dedup of already-sent digests.
///
/// # Example
///
/// ```ignore
/// let service = DigestService::new(source, directory, deliverer, "your@mailman.com");
/// let summary = service.run().await?;
/// println!("{summary}");
/// ```
pub struct DigestService<S, D, M> {
    source: S,
    directory: D,
    deliverer: M,
    sender: String,
}

impl<S, D, M> DigestService<S, D, M>
where
    S: ArticleSource,
    D: SubscriberDirectory,
    M: Deliverer,
{
    /// Creates a service over the given providers.
    ///
    /// `sender` is the fixed From address used for every outgoing digest.
    pub fn new(source: S, directory: D, deliverer: M, sender: impl Into<String>) -> Self {
        Self {
            source,
            directory,
            deliverer,
            sender: sender.into(),
        }
    }

    /// Executes one digest run against the local calendar day.
    ///
    /// The weekday is computed exactly once here so every subscriber in the
    /// run is judged against the same day.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Fetch`] or [`DigestError::Directory`] if the
    /// batch or the subscriber list cannot be obtained; no deliveries are
    /// attempted in that case.
    pub async fn run(&self) -> Result<DigestRunSummary, DigestError> {
        let weekday = weekday_number(Local::now().weekday());
        self.run_for_day(weekday, &mut StdRng::from_entropy()).await
    }

    /// Executes one digest run for an explicit weekday and random source.
    ///
    /// [`run`](Self::run) delegates here; schedulers and tests that need a
    /// fixed day or reproducible random orderings call this directly.
    pub async fn run_for_day<R: Rng + Send>(
        &self,
        weekday: u8,
        rng: &mut R,
    ) -> Result<DigestRunSummary, DigestError> {
        let articles = self.source.fetch().await.map_err(|e| {
            error!("article fetch failed: {e}");
            e
        })?;
        let subscribers = self.directory.list().await.map_err(|e| {
            error!("subscriber list load failed: {e}");
            e
        })?;

        info!(
            articles = articles.len(),
            subscribers = subscribers.len(),
            weekday,
            "starting digest run"
        );

        let mut summary = DigestRunSummary {
            considered: subscribers.len(),
            ..DigestRunSummary::default()
        };

        for subscriber in &subscribers {
            if !is_eligible(subscriber, weekday) {
                debug!("skipping newsletter for {}", subscriber.email);
                summary.skipped += 1;
                continue;
            }

            let ordered = order(&articles, subscriber.ordering, rng);
            let body = render(&ordered);

            match self.deliverer.send(&self.sender, &subscriber.email, &body).await {
                Ok(()) => {
                    info!("newsletter sent to {}", subscriber.email);
                    summary.sent += 1;
                }
                Err(e) => {
                    warn!("delivery to {} failed: {e}", subscriber.email);
                    summary.failures.push(SubscriberFailure {
                        email: subscriber.email.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }
}
