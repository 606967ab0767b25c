//! Stay models: the booked date range and its derived price.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// A check-in/check-out pair.
///
/// Inputs are not guaranteed to be ordered. A range whose end is on or
/// before its start is zero-length, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The check-in date.
    pub start: NaiveDate,
    /// The check-out date.
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns the number of billable nights in the range.
    ///
    /// Both ends are calendar dates, so the difference is a whole number of
    /// days with no daylight-saving drift.
    ///
    /// # Examples
    ///
    /// ```
    /// use stay_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange {
    ///     start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    /// };
    /// assert_eq!(range.nights(), 3);
    ///
    /// let inverted = DateRange { start: range.end, end: range.start };
    /// assert_eq!(inverted.nights(), 0);
    /// ```
    pub fn nights(&self) -> u32 {
        let days = (self.end - self.start).num_days();
        u32::try_from(days).unwrap_or(0)
    }
}

/// The derived price of a stay.
///
/// Computed fresh on every input change; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedStay {
    /// Number of billable nights.
    pub nights: u32,
    /// `nights * nightly_rate`.
    pub total_price: Decimal,
}

impl PricedStay {
    /// The non-billable stay: zero nights at zero cost.
    pub const ZERO: PricedStay = PricedStay {
        nights: 0,
        total_price: Decimal::ZERO,
    };
}

/// A priced stay for a specific catalogue room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    /// The room being quoted.
    pub room_id: String,
    /// Requested check-in date, if entered yet.
    pub check_in: Option<NaiveDate>,
    /// Requested check-out date, if entered yet.
    pub check_out: Option<NaiveDate>,
    /// Number of guests staying.
    pub guests: u32,
    /// The room's nightly rate at quote time.
    pub nightly_rate: Decimal,
    /// Nights and total price.
    pub stay: PricedStay,
    /// Audit trace of the rules applied.
    pub audit_trace: AuditTrace,
}
