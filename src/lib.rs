//! mailman - a periodic space-news digest mailer
//!
//! This crate provides the core functionality for the mailman digest
//! pipeline: fetching the current batch of articles from a remote content
//! source, deciding which subscribers are due a digest today, producing a
//! per-subscriber ordering of the shared batch, rendering the message body,
//! and delivering it over SMTP.

pub mod config;
pub mod domain;
pub mod providers;
pub mod services;

pub use services::{DigestError, DigestService};
