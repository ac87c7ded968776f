//! Domain layer types for the mailman digest pipeline.
//!
//! This module contains the core value types used throughout the crate:
//! articles, subscribers, ordering preferences, and the per-run summary.

mod article;
mod subscriber;
mod summary;

pub use article::{Article, ArticleId};
pub use subscriber::{OrderingPreference, Subscriber, EVERY_DAY};
pub use summary::{DigestRunSummary, SubscriberFailure};
