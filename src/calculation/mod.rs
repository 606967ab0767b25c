//! Calculation logic for the Stay Engine.
//!
//! This module contains the pure rules of the storefront: stay pricing and
//! quoting, room search, document status derivation, rent due-date
//! assessment, reminder generation, and the monthly rent ledger.
//!
//! Every function takes "now" as an explicit argument; nothing here reads
//! the system clock.

mod day_count;
mod document_status;
mod reminders;
mod rent_due;
mod rent_ledger;
mod room_filter;
mod stay_pricing;

pub use day_count::{days_until, due_date_in_month, last_day_of_month};
pub use document_status::{
    DocumentAssessment, assess_document, derive_document_status, refresh_statuses,
};
pub use reminders::{RENEWAL_WINDOW_DAYS, ReminderRun, build_reminders, run_reminders};
pub use rent_due::{
    ChargeAssessment, RENT_DUE_LOOKAHEAD_DAYS, RENT_OVERDUE_LOOKBACK_DAYS, assess_charge,
    in_rent_reminder_window,
};
pub use rent_ledger::{PaymentEntry, month_payment_status, record_payment, summarize_rent};
pub use room_filter::{filter_rooms, room_matches};
pub use stay_pricing::{StayPricingResult, compute_stay, price_stay, quote_stay};
