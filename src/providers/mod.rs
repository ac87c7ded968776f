//! External collaborator boundaries.
//!
//! This module contains the I/O boundary traits and their concrete
//! implementations:
//!
//! - [`articles`] - the remote content source
//! - [`subscribers`] - the subscriber directory
//! - [`delivery`] - the outbound mail transport

pub mod articles;
pub mod delivery;
pub mod subscribers;
