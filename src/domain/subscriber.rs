//! Subscriber domain types.
//!
//! A [`Subscriber`] record says on which day of the week a recipient wants
//! their digest, how the articles should be ordered for them, and where to
//! send the result. Records are loaded fresh at the start of each run and
//! never mutated.

use serde::{Deserialize, Serialize};

/// Day-of-week selector value meaning "every day".
///
/// Weekdays are numbered 0 = Monday through 6 = Sunday; 7 is the sentinel.
/// Any other value never matches a weekday and the subscriber is simply
/// skipped on every run.
pub const EVERY_DAY: u8 = 7;

/// How a subscriber wants the article batch ordered in their digest.
///
/// The serde tags match the ordering strings used in subscriber files:
/// `"title"`, `"published_at"`, `"random"`. Keeping this a closed enum makes
/// the preference-to-comparator mapping exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPreference {
    /// Ascending lexicographic order by title, stable for ties.
    Title,
    /// Ascending by publish timestamp, stable for ties.
    PublishedAt,
    /// A uniformly random permutation from an injected random source.
    Random,
}

/// One digest recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Day-of-week selector: 0 = Monday … 6 = Sunday, or [`EVERY_DAY`].
    pub week_day: u8,
    /// How to order the article batch for this subscriber.
    pub ordering: OrderingPreference,
    /// Destination email address.
    pub email: String,
}
