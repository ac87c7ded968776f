//! Per-run outcome reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A delivery that failed for one subscriber during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberFailure {
    /// Address of the subscriber whose delivery failed.
    pub email: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Outcome of one digest run.
///
/// Constructed by [`DigestService::run`](crate::DigestService::run) and
/// consumed by the caller for reporting. A summary is only produced for runs
/// that got past the fatal fetch/load stages; individual delivery failures
/// are recorded here rather than aborting the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestRunSummary {
    /// Number of subscribers considered.
    pub considered: usize,
    /// Number of digests delivered.
    pub sent: usize,
    /// Number of subscribers skipped as not due today.
    pub skipped: usize,
    /// Deliveries that failed, one entry per affected subscriber.
    pub failures: Vec<SubscriberFailure>,
}

impl DigestRunSummary {
    /// Returns the number of failed deliveries.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if every attempted delivery succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for DigestRunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "considered {}, sent {}, skipped {}, failed {}",
            self.considered,
            self.sent,
            self.skipped,
            self.failed()
        )
    }
}
