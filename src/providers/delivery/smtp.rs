//! SMTP mail transport.
//!
//! Sends digests through a local SMTP relay via `lettre`'s async transport.
//! The relay connection is plaintext; the expected deployment hands the
//! message to a relay on localhost which owns onward TLS.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Deliverer, DeliveryError};

/// [`Deliverer`] backed by an SMTP relay.
pub struct SmtpDeliverer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    subject: String,
}

impl SmtpDeliverer {
    /// Creates a deliverer targeting the given relay host and port.
    ///
    /// `subject` is used as the Subject header of every outgoing digest.
    pub fn new(host: &str, port: u16, subject: impl Into<String>) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();
        Self {
            transport,
            subject: subject.into(),
        }
    }
}

#[async_trait]
impl Deliverer for SmtpDeliverer {
    async fn send(&self, from: &str, to: &str, body: &str) -> Result<(), DeliveryError> {
        let from: Mailbox = from.parse().map_err(|e| DeliveryError::InvalidSender {
            address: from.to_string(),
            reason: format!("{e}"),
        })?;
        let to: Mailbox = to.parse().map_err(|e| DeliveryError::InvalidRecipient {
            address: to.to_string(),
            reason: format!("{e}"),
        })?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&self.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(())
    }
}
