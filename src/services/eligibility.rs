//! Subscriber eligibility.
//!
//! Weekday numbering is 0 = Monday through 6 = Sunday everywhere in this
//! crate: in subscriber records, in [`weekday_number`], and in the value the
//! digest run computes once and judges every subscriber against. Keeping the
//! two sides of that comparison on one convention is the whole job of this
//! module.

use chrono::Weekday;

use crate::domain::{Subscriber, EVERY_DAY};

/// Maps a calendar weekday to the crate's 0 = Monday … 6 = Sunday numbering.
pub fn weekday_number(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// Returns true if the subscriber should receive a digest on `weekday`.
///
/// True iff the subscriber's selector is the [`EVERY_DAY`] sentinel or
/// equals `weekday` exactly. An out-of-range selector never matches; it is
/// not an error.
pub fn is_eligible(subscriber: &Subscriber, weekday: u8) -> bool {
    subscriber.week_day == EVERY_DAY || subscriber.week_day == weekday
}
