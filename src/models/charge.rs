//! Recurring charge (rent schedule) and payment models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lifecycle status of a recurring charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// Currently being collected.
    #[default]
    Active,
    /// Temporarily suspended.
    Paused,
    /// Tenancy has ended.
    Completed,
}

/// Settlement status of a single payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    #[default]
    Pending,
    /// Paid in full.
    Paid,
    /// Paid in part.
    Partial,
    /// Past due and unpaid.
    Overdue,
}

/// A payment recorded against a recurring charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// The due date this payment settles.
    pub due_date: NaiveDate,
    /// When the money arrived, if it has.
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    /// Amount owed for the period.
    pub amount_due: Decimal,
    /// Amount actually received.
    #[serde(default)]
    pub amount_paid: Decimal,
    /// Settlement status.
    #[serde(default)]
    pub status: PaymentStatus,
    /// How the money was paid (e.g., "bank_transfer", "cash").
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Free-form notes on the payment.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Payment {
    /// Returns true if the payment's due date falls in the given calendar month.
    ///
    /// Matching is by year and month only, not by exact date.
    pub fn is_due_in_month(&self, year: i32, month: u32) -> bool {
        self.due_date.year() == year && self.due_date.month() == month
    }
}

/// A monthly charge such as rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringCharge {
    /// Unique identifier for the charge.
    pub id: String,
    /// Amount owed each month.
    pub amount: Decimal,
    /// Day of the month the charge falls due (1..=31).
    pub due_day_of_month: u32,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ChargeStatus,
    /// Payments recorded so far, oldest first.
    #[serde(default)]
    pub payment_history: Vec<Payment>,
    /// Room or villa the charge is for.
    #[serde(default)]
    pub room_name: Option<String>,
    /// Tenant responsible for the charge.
    #[serde(default)]
    pub tenant_name: Option<String>,
    /// First day the charge applies.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day the charge applies.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl RecurringCharge {
    /// Checks the record before it is handed to the reminder engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCharge`] when the amount is not positive
    /// or the due day is outside `1..=31`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidCharge {
                charge_id: self.id.clone(),
                message: format!("amount must be positive, got {}", self.amount),
            });
        }
        if !(1..=31).contains(&self.due_day_of_month) {
            return Err(EngineError::InvalidCharge {
                charge_id: self.id.clone(),
                message: format!(
                    "due day {} is outside 1..=31",
                    self.due_day_of_month
                ),
            });
        }
        Ok(())
    }

    /// Returns true if the charge is currently being collected.
    pub fn is_active(&self) -> bool {
        self.status == ChargeStatus::Active
    }

    /// Payments whose due date falls in the given calendar month, in history order.
    pub fn payments_in_month(&self, year: i32, month: u32) -> impl Iterator<Item = &Payment> {
        self.payment_history
            .iter()
            .filter(move |p| p.is_due_in_month(year, month))
    }

    /// Returns true if a Paid payment is recorded against the given month.
    ///
    /// # Examples
    ///
    /// ```
    /// use stay_engine::models::{Payment, PaymentStatus, RecurringCharge, ChargeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let charge = RecurringCharge {
    ///     id: "rent-1".to_string(),
    ///     amount: Decimal::new(1200, 0),
    ///     due_day_of_month: 5,
    ///     status: ChargeStatus::Active,
    ///     payment_history: vec![Payment {
    ///         due_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    ///         paid_date: NaiveDate::from_ymd_opt(2024, 3, 12),
    ///         amount_due: Decimal::new(1200, 0),
    ///         amount_paid: Decimal::new(1200, 0),
    ///         status: PaymentStatus::Paid,
    ///         payment_method: None,
    ///         notes: None,
    ///     }],
    ///     room_name: None,
    ///     tenant_name: None,
    ///     start_date: None,
    ///     end_date: None,
    /// };
    /// assert!(charge.is_paid_for_month(2024, 3));
    /// assert!(!charge.is_paid_for_month(2024, 4));
    /// ```
    pub fn is_paid_for_month(&self, year: i32, month: u32) -> bool {
        self.payments_in_month(year, month)
            .any(|p| p.status == PaymentStatus::Paid)
    }

    /// Name to show on reminders: room and tenant when known, otherwise the id.
    pub fn display_name(&self) -> String {
        match (&self.room_name, &self.tenant_name) {
            (Some(room), Some(tenant)) => format!("{} - {}", room, tenant),
            (Some(room), None) => room.clone(),
            (None, Some(tenant)) => tenant.clone(),
            (None, None) => self.id.clone(),
        }
    }
}

/// A charge's payment status for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeMonthStatus {
    /// The charge this entry describes.
    pub charge_id: String,
    /// Room and tenant, as shown on reminders.
    pub display_name: String,
    /// Amount owed each month.
    pub amount: Decimal,
    /// This month's due date.
    pub due_date: NaiveDate,
    /// Status of the first payment recorded against this month, or Pending.
    pub status: PaymentStatus,
}

/// Rent totals for the current month across Active charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSummary {
    /// The month summarised, as `YYYY-MM`.
    pub month: String,
    /// Sum of the monthly amounts of every Active charge.
    pub total_monthly_rent: Decimal,
    /// Active charges whose month status is Paid.
    pub paid_this_month: usize,
    /// Active charges whose month status is Pending.
    pub pending_this_month: usize,
    /// Per-charge month status, in input order.
    pub charges: Vec<ChargeMonthStatus>,
}
