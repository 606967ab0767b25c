//! Reminder model.
//!
//! Reminders are never persisted. They are regenerated from documents and
//! charges on every run, so the caller owns any dismissal state and matches
//! it back by [`Reminder::id`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// A document is about to expire.
    DocumentExpiry,
    /// A document's renewal date is coming up.
    DocumentRenewal,
    /// Rent for the current month is due or overdue.
    RentDue,
}

/// A derived notice that a deadline is approaching or overdue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable id, derived from the subject and kind.
    pub id: String,
    /// Id of the document or charge the reminder is about.
    pub subject_id: String,
    /// Display name of the subject.
    pub subject_name: String,
    /// The deadline being reminded about.
    pub due_date: NaiveDate,
    /// What kind of deadline it is.
    pub kind: ReminderKind,
    /// Amount owed, for rent reminders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}
