//! Reminder time gate.
//!
//! A pure accept/reject predicate over times of day. No alarm is armed and
//! nothing is stored; the caller decides what to do with the outcome.
//! Time-of-day only: a proposed time earlier than now is rejected even if
//! the user meant tomorrow.

use chrono::{Local, NaiveTime};

/// Outcome of the reminder gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    Accepted,
    Rejected,
}

/// `Accepted` iff `proposed` is strictly later than `now` on the same
/// day's clock. Equal times are rejected.
pub fn validate(proposed: NaiveTime, now: NaiveTime) -> ReminderOutcome {
    if proposed > now {
        ReminderOutcome::Accepted
    } else {
        ReminderOutcome::Rejected
    }
}

/// Gate `proposed` against the current local wall-clock time.
pub fn validate_now(proposed: NaiveTime) -> ReminderOutcome {
    validate(proposed, Local::now().time())
}
