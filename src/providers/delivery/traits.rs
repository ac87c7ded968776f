//! Mail transport trait definition.

use async_trait::async_trait;

/// Errors that can occur while delivering one message.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The configured sender address could not be parsed.
    #[error("invalid sender address {address}: {reason}")]
    InvalidSender { address: String, reason: String },

    /// The subscriber's address could not be parsed.
    #[error("invalid recipient address {address}: {reason}")]
    InvalidRecipient { address: String, reason: String },

    /// The message could not be handed to the transport.
    #[error("smtp transport error: {0}")]
    Transport(String),
}

/// Trait for outbound mail transports.
///
/// One call delivers one rendered message to one recipient address. No
/// retry is attempted here; a failure is reported to the caller so it can
/// be recorded against that subscriber without aborting the run.
#[async_trait]
pub trait Deliverer: Send + Sync {
    /// Sends `body` from `from` to `to`.
    async fn send(&self, from: &str, to: &str, body: &str) -> Result<(), DeliveryError>;
}
