//! Per-subscriber ordering of the shared article batch.
//!
//! The batch fetched for a run is shared read-only across every subscriber,
//! so ordering always works on a copy. The random variant takes an injected
//! random source rather than the process-global one, which keeps runs
//! reproducible under test.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Article, OrderingPreference};

/// Returns a new sequence holding the batch in the subscriber's order.
///
/// The input is never mutated. `Title` and `PublishedAt` are stable sorts;
/// `Random` is a uniform permutation drawn from `rng`.
pub fn order<R: Rng>(
    articles: &[Article],
    preference: OrderingPreference,
    rng: &mut R,
) -> Vec<Article> {
    let mut ordered = articles.to_vec();
    match preference {
        OrderingPreference::Title => ordered.sort_by(|a, b| a.title.cmp(&b.title)),
        OrderingPreference::PublishedAt => ordered.sort_by_key(|a| a.published_at),
        OrderingPreference::Random => ordered.shuffle(rng),
    }
    ordered
}
