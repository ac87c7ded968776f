//! Outbound mail transport implementations.
//!
//! This module contains the [`Deliverer`] trait and the SMTP implementation.
//! Delivery failures are per-subscriber outcomes: the pipeline records them
//! in the run summary and keeps going.

mod smtp;
mod traits;

pub use smtp::SmtpDeliverer;
pub use traits::{Deliverer, DeliveryError};
