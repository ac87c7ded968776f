//! Content source implementations.
//!
//! This module contains the [`ArticleSource`] trait and the Spaceflight News
//! API implementation. The pipeline fetches the batch exactly once per run;
//! a fetch failure is fatal to the run since there is nothing to send
//! without content.

mod spaceflight;
mod traits;

pub use spaceflight::{SpaceflightNewsSource, DEFAULT_ENDPOINT};
pub use traits::{ArticleSource, SourceError};
