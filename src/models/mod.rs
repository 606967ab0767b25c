//! Core data models for the Stay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod charge;
mod document;
mod reminder;
mod room;
mod stay;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use charge::{
    ChargeMonthStatus, ChargeStatus, Payment, PaymentStatus, RecurringCharge, RentSummary,
};
pub use document::{
    DEFAULT_REMINDER_WINDOW_DAYS, DocumentKind, DocumentStatus, TrackedDocument,
};
pub use reminder::{Reminder, ReminderKind};
pub use room::{Room, RoomSearch};
pub use stay::{DateRange, PricedStay, StayQuote};
