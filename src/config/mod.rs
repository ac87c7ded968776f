//! Configuration and settings management.
//!
//! This module provides the settings types for the surrounding CLI layer.
//! Settings are read from a JSON file when one is given; the defaults match
//! a local development setup with an SMTP relay on port 1025.

mod settings;

pub use settings::{ConfigError, Settings, SmtpSettings, SourceSettings, SubscriberSettings};
