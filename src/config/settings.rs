//! Settings types for the digest mailer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::providers::articles::DEFAULT_ENDPOINT;

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be decoded.
    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level settings for one digest run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Content source configuration.
    pub source: SourceSettings,
    /// Subscriber list configuration.
    pub subscribers: SubscriberSettings,
    /// Outbound mail configuration.
    pub smtp: SmtpSettings,
}

impl Settings {
    /// Loads settings from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a settings file only
    /// needs to spell out what differs from the local development setup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Where the article batch comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// URL of the article list endpoint.
    pub endpoint: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Where the subscriber list comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriberSettings {
    /// Path of the JSON subscriber file.
    pub path: PathBuf,
}

impl Default for SubscriberSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/subscribers.json"),
        }
    }
}

/// How digests leave the building.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    /// SMTP relay hostname.
    pub host: String,
    /// SMTP relay port.
    pub port: u16,
    /// Fixed sender address for every digest.
    pub sender: String,
    /// Subject header for every digest.
    pub subject: String,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1025,
            sender: "your@mailman.com".to_string(),
            subject: "Your space news".to_string(),
        }
    }
}
