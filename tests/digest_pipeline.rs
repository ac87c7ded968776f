//! End-to-end tests for the digest pipeline.
//!
//! These tests drive [`DigestService`] through the public crate surface with
//! in-memory providers, verifying the scenarios the pipeline promises:
//! per-subscriber ordering reflected in the rendered body, eligibility
//! filtering, failure isolation, and deterministic re-runs.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

use mailman::domain::{Article, ArticleId, OrderingPreference, Subscriber, EVERY_DAY};
use mailman::providers::articles::{ArticleSource, SourceError};
use mailman::providers::delivery::{Deliverer, DeliveryError};
use mailman::providers::subscribers::{DirectoryError, SubscriberDirectory};
use mailman::DigestService;

// ============================================================================
// In-memory providers
// ============================================================================

struct FixedSource {
    articles: Vec<Article>,
}

#[async_trait]
impl ArticleSource for FixedSource {
    async fn fetch(&self) -> Result<Vec<Article>, SourceError> {
        Ok(self.articles.clone())
    }
}

struct FixedDirectory {
    subscribers: Vec<Subscriber>,
}

#[async_trait]
impl SubscriberDirectory for FixedDirectory {
    async fn list(&self) -> Result<Vec<Subscriber>, DirectoryError> {
        Ok(self.subscribers.clone())
    }
}

/// Shared record of `(to, body)` pairs captured by a [`RecordingDeliverer`].
type SentLog = Arc<Mutex<Vec<(String, String)>>>;

/// Records every delivered message; fails deliveries to `reject` addresses.
#[derive(Default)]
struct RecordingDeliverer {
    sent: SentLog,
    reject: Vec<String>,
}

impl RecordingDeliverer {
    fn new() -> (Self, SentLog) {
        let deliverer = Self::default();
        let log = Arc::clone(&deliverer.sent);
        (deliverer, log)
    }

    fn rejecting(address: &str) -> (Self, SentLog) {
        let (mut deliverer, log) = Self::new();
        deliverer.reject.push(address.to_string());
        (deliverer, log)
    }
}

#[async_trait]
impl Deliverer for RecordingDeliverer {
    async fn send(&self, _from: &str, to: &str, body: &str) -> Result<(), DeliveryError> {
        if self.reject.iter().any(|r| r == to) {
            return Err(DeliveryError::Transport("relay unavailable".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn article(id: &str, title: &str, published_day: u32) -> Article {
    Article {
        id: ArticleId::from(id),
        title: title.to_string(),
        url: format!("https://example.com/{id}"),
        image_url: format!("https://example.com/{id}.jpg"),
        news_site: "Example News".to_string(),
        summary: "summary".to_string(),
        published_at: Utc.with_ymd_and_hms(2024, 3, published_day, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, published_day, 9, 0, 0).unwrap(),
        featured: false,
        launches: vec![],
        events: vec![],
    }
}

/// Titles "B", "A", "C" with publish order C, B, A.
fn batch() -> Vec<Article> {
    vec![
        article("1", "B", 2),
        article("2", "A", 3),
        article("3", "C", 1),
    ]
}

fn subscriber(week_day: u8, ordering: OrderingPreference, email: &str) -> Subscriber {
    Subscriber {
        week_day,
        ordering,
        email: email.to_string(),
    }
}

fn title_positions(body: &str) -> (usize, usize, usize) {
    (
        body.find("A (").unwrap(),
        body.find("B (").unwrap(),
        body.find("C (").unwrap(),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn title_ordering_renders_alphabetically() {
    let (deliverer, log) = RecordingDeliverer::new();
    let service = DigestService::new(
        FixedSource { articles: batch() },
        FixedDirectory {
            subscribers: vec![subscriber(EVERY_DAY, OrderingPreference::Title, "t@example.com")],
        },
        deliverer,
        "your@mailman.com",
    );

    let summary = service
        .run_for_day(0, &mut StdRng::seed_from_u64(0))
        .await
        .unwrap();
    assert_eq!(summary.sent, 1);

    let sent = log.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (a, b, c) = title_positions(&sent[0].1);
    assert!(a < b && b < c, "expected A before B before C");
}

#[tokio::test]
async fn published_ordering_follows_timestamps() {
    let (deliverer, log) = RecordingDeliverer::new();
    let service = DigestService::new(
        FixedSource { articles: batch() },
        FixedDirectory {
            subscribers: vec![subscriber(
                EVERY_DAY,
                OrderingPreference::PublishedAt,
                "p@example.com",
            )],
        },
        deliverer,
        "your@mailman.com",
    );

    service
        .run_for_day(0, &mut StdRng::seed_from_u64(0))
        .await
        .unwrap();

    let sent = log.lock().unwrap();
    let (a, b, c) = title_positions(&sent[0].1);
    // Publish order is C (day 1), B (day 2), A (day 3).
    assert!(c < b && b < a, "expected C before B before A");
}

#[tokio::test]
async fn only_subscribers_due_today_receive_a_digest() {
    let (deliverer, log) = RecordingDeliverer::new();
    let service = DigestService::new(
        FixedSource { articles: batch() },
        FixedDirectory {
            subscribers: vec![
                subscriber(2, OrderingPreference::Title, "wednesday@example.com"),
                subscriber(4, OrderingPreference::Title, "friday@example.com"),
            ],
        },
        deliverer,
        "your@mailman.com",
    );

    let summary = service
        .run_for_day(2, &mut StdRng::seed_from_u64(0))
        .await
        .unwrap();

    assert_eq!(summary.considered, 2);
    assert_eq!(summary.sent, 1);
    assert_eq!(summary.skipped, 1);

    let sent = log.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "wednesday@example.com");
}

#[tokio::test]
async fn failed_delivery_is_isolated_and_reported() {
    let (deliverer, log) = RecordingDeliverer::rejecting("first@example.com");
    let service = DigestService::new(
        FixedSource { articles: batch() },
        FixedDirectory {
            subscribers: vec![
                subscriber(EVERY_DAY, OrderingPreference::Title, "first@example.com"),
                subscriber(EVERY_DAY, OrderingPreference::Title, "second@example.com"),
            ],
        },
        deliverer,
        "your@mailman.com",
    );

    let summary = service
        .run_for_day(0, &mut StdRng::seed_from_u64(0))
        .await
        .unwrap();

    assert_eq!(summary.sent, 1);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.failures[0].email, "first@example.com");

    // The second delivery was still attempted and succeeded.
    let sent = log.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "second@example.com");
}

#[tokio::test]
async fn random_ordering_delivers_a_permutation_of_the_batch() {
    let (deliverer, log) = RecordingDeliverer::new();
    let service = DigestService::new(
        FixedSource { articles: batch() },
        FixedDirectory {
            subscribers: vec![subscriber(
                EVERY_DAY,
                OrderingPreference::Random,
                "r@example.com",
            )],
        },
        deliverer,
        "your@mailman.com",
    );

    let summary = service
        .run_for_day(0, &mut StdRng::seed_from_u64(42))
        .await
        .unwrap();
    assert_eq!(summary.sent, 1);

    let sent = log.lock().unwrap();
    let body = &sent[0].1;
    // All three articles appear exactly once, whatever the order.
    for title in ["A (", "B (", "C ("] {
        assert_eq!(body.matches(title).count(), 1);
    }
}

#[tokio::test]
async fn rerunning_an_unchanged_run_produces_the_same_counts() {
    let subscribers = vec![
        subscriber(1, OrderingPreference::Title, "a@example.com"),
        subscriber(EVERY_DAY, OrderingPreference::PublishedAt, "b@example.com"),
        subscriber(5, OrderingPreference::Title, "c@example.com"),
    ];

    let mut summaries = vec![];
    for _ in 0..2 {
        let (deliverer, _log) = RecordingDeliverer::new();
        let service = DigestService::new(
            FixedSource { articles: batch() },
            FixedDirectory {
                subscribers: subscribers.clone(),
            },
            deliverer,
            "your@mailman.com",
        );
        summaries.push(
            service
                .run_for_day(1, &mut StdRng::seed_from_u64(9))
                .await
                .unwrap(),
        );
    }

    assert_eq!(summaries[0].considered, summaries[1].considered);
    assert_eq!(summaries[0].sent, summaries[1].sent);
    assert_eq!(summaries[0].skipped, summaries[1].skipped);
    assert_eq!(summaries[0].failed(), summaries[1].failed());
    assert_eq!(summaries[0].sent, 2);
    assert_eq!(summaries[0].skipped, 1);
}

#[tokio::test]
async fn empty_batch_still_delivers_greeting_and_signature() {
    let (deliverer, log) = RecordingDeliverer::new();
    let service = DigestService::new(
        FixedSource { articles: vec![] },
        FixedDirectory {
            subscribers: vec![subscriber(EVERY_DAY, OrderingPreference::Title, "e@example.com")],
        },
        deliverer,
        "your@mailman.com",
    );

    let summary = service
        .run_for_day(0, &mut StdRng::seed_from_u64(0))
        .await
        .unwrap();
    assert_eq!(summary.sent, 1);

    let sent = log.lock().unwrap();
    assert!(sent[0].1.starts_with("Hello!"));
    assert!(sent[0].1.contains("your Mailman!"));
}
