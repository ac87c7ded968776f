//! Digest pipeline services.
//!
//! This module contains the pure pipeline stages and the orchestration that
//! ties them together:
//!
//! - [`eligibility`] - is a subscriber due a digest on the run's day?
//! - [`ordering`] - per-subscriber ordering of the shared article batch
//! - [`renderer`] - turning an ordered batch into a message body
//! - [`DigestService`] - one full fetch → filter → order → render → deliver run

pub mod eligibility;
pub mod ordering;
pub mod renderer;

mod digest_service;

pub use digest_service::{DigestError, DigestService};
