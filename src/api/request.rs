//! Request types for the Stay Engine API.
//!
//! Dates and timestamps are parsed by serde at the boundary, so a malformed
//! date never reaches the calculation core.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::calculation::PaymentEntry;
use crate::error::EngineResult;
use crate::models::{DocumentKind, DocumentStatus, RecurringCharge, TrackedDocument};

fn default_guests() -> u32 {
    1
}

/// Parses a request timestamp.
///
/// Accepts RFC 3339 with any offset (`2024-03-01T09:00:00.000Z`), converted
/// to UTC; a zone-less `2024-03-01T09:00:00`, taken as UTC; and a bare date
/// `2024-03-01`, taken as UTC midnight.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc).naive_utc());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn deserialize_now<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_timestamp(&raw).ok_or_else(|| {
                de::Error::custom(format!(
                    "invalid timestamp '{}', expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
                    raw
                ))
            })
        })
        .transpose()
}

/// Resolves an optional request timestamp, reading the UTC clock once when absent.
pub fn resolve_now(now: Option<NaiveDateTime>) -> NaiveDateTime {
    now.unwrap_or_else(|| Utc::now().naive_utc())
}

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Catalogue id of the room to quote.
    pub room_id: String,
    /// Check-in date, if entered.
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    /// Check-out date, if entered.
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    /// Number of guests staying.
    #[serde(default = "default_guests")]
    pub guests: u32,
}

/// A tracked document as submitted to the `/reminders` endpoint.
///
/// Identical to [`TrackedDocument`] except that the reminder window may be
/// left out, in which case the configured default applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// Unique identifier for the document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Kind of document.
    #[serde(default)]
    pub kind: DocumentKind,
    /// Expiry date, if the document expires.
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    /// Renewal date, if one is scheduled.
    #[serde(default)]
    pub renewal_date: Option<NaiveDate>,
    /// Days before expiry to start reminding.
    #[serde(default)]
    pub reminder_window_days: Option<u32>,
    /// Last stored status.
    #[serde(default)]
    pub status: DocumentStatus,
    /// Property the document belongs to.
    #[serde(default)]
    pub property_id: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl DocumentRequest {
    /// Converts to a validated [`TrackedDocument`], filling in the default window.
    pub fn into_document(self, default_window_days: u32) -> EngineResult<TrackedDocument> {
        let doc = TrackedDocument {
            id: self.id,
            name: self.name,
            kind: self.kind,
            expiry_date: self.expiry_date,
            renewal_date: self.renewal_date,
            reminder_window_days: self.reminder_window_days.unwrap_or(default_window_days),
            status: self.status,
            property_id: self.property_id,
            notes: self.notes,
        };
        doc.validate()?;
        Ok(doc)
    }
}

/// Request body for the `/reminders` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersRequest {
    /// Evaluation time in UTC; the server clock when omitted.
    #[serde(default, deserialize_with = "deserialize_now")]
    pub now: Option<NaiveDateTime>,
    /// Documents to assess.
    #[serde(default)]
    pub documents: Vec<DocumentRequest>,
    /// Recurring charges to assess.
    #[serde(default)]
    pub charges: Vec<RecurringCharge>,
}

/// Request body for the `/rent/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentSummaryRequest {
    /// Evaluation time in UTC; the server clock when omitted.
    #[serde(default, deserialize_with = "deserialize_now")]
    pub now: Option<NaiveDateTime>,
    /// Charges to summarise.
    #[serde(default)]
    pub charges: Vec<RecurringCharge>,
}

/// Request body for the `/rent/payments` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Evaluation time in UTC; the server clock when omitted.
    #[serde(default, deserialize_with = "deserialize_now")]
    pub now: Option<NaiveDateTime>,
    /// The charge being paid.
    pub charge: RecurringCharge,
    /// Amount owed; the charge amount when omitted.
    #[serde(default)]
    pub amount_due: Option<Decimal>,
    /// Amount received; the amount owed when omitted.
    #[serde(default)]
    pub amount_paid: Option<Decimal>,
    /// How the money was paid.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl PaymentRequest {
    /// Splits the request into the charge, the payment entry, and `now`.
    pub fn into_parts(self) -> (RecurringCharge, PaymentEntry, Option<NaiveDateTime>) {
        let entry = PaymentEntry {
            amount_due: self.amount_due,
            amount_paid: self.amount_paid,
            payment_method: self.payment_method,
            notes: self.notes,
        };
        (self.charge, entry, self.now)
    }
}

/// Validates every charge in a request, failing on the first invalid one.
pub fn validate_charges(charges: &[RecurringCharge]) -> EngineResult<()> {
    charges.iter().try_for_each(RecurringCharge::validate)
}
