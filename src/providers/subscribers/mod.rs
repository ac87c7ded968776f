//! Subscriber directory implementations.
//!
//! This module contains the [`SubscriberDirectory`] trait and the JSON file
//! implementation. The list is loaded fresh once per run; a load failure is
//! fatal to the run.

mod json_file;
mod traits;

pub use json_file::JsonFileDirectory;
pub use traits::{DirectoryError, SubscriberDirectory};
