//! Monthly rent ledger: per-month payment status, totals, and recording
//! new payments.
//!
//! All month matching is by the payment's due-date year and month.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ChargeMonthStatus, Payment, PaymentStatus, RecurringCharge, RentSummary};

use super::day_count::due_date_in_month;

/// Status of the first payment recorded against `now`'s month, or
/// [`PaymentStatus::Pending`] when there is none.
pub fn month_payment_status(charge: &RecurringCharge, now: NaiveDateTime) -> PaymentStatus {
    let today = now.date();
    charge
        .payments_in_month(today.year(), today.month())
        .next()
        .map(|p| p.status)
        .unwrap_or_default()
}

/// Summarises the current month's rent over Active charges.
///
/// Paused and Completed charges are left out of the totals and the
/// per-charge list.
pub fn summarize_rent(charges: &[RecurringCharge], now: NaiveDateTime) -> RentSummary {
    let today = now.date();

    let statuses: Vec<ChargeMonthStatus> = charges
        .iter()
        .filter(|c| c.is_active())
        .map(|charge| ChargeMonthStatus {
            charge_id: charge.id.clone(),
            display_name: charge.display_name(),
            amount: charge.amount,
            due_date: due_date_in_month(today, charge.due_day_of_month),
            status: month_payment_status(charge, now),
        })
        .collect();

    let total_monthly_rent = statuses.iter().map(|s| s.amount).sum();
    let count = |status: PaymentStatus| statuses.iter().filter(|s| s.status == status).count();

    RentSummary {
        month: format!("{}-{:02}", today.year(), today.month()),
        total_monthly_rent,
        paid_this_month: count(PaymentStatus::Paid),
        pending_this_month: count(PaymentStatus::Pending),
        charges: statuses,
    }
}

/// What the caller knows about a payment being recorded.
///
/// Every field is optional; see [`record_payment`] for the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentEntry {
    /// Amount owed; the charge amount when `None`.
    pub amount_due: Option<Decimal>,
    /// Amount received; `amount_due` when `None`.
    pub amount_paid: Option<Decimal>,
    /// How the money was paid.
    pub payment_method: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Builds the payment record for this month's instalment of `charge`.
///
/// The payment is dated to this month's due date and marked paid today.
/// `amount_due` defaults to the charge amount and `amount_paid` to
/// `amount_due`; method and notes are copied through. The charge itself is
/// not modified; appending the payment to its history is up to the caller.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayment`] when `amount_due` or
/// `amount_paid` is not positive.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{PaymentEntry, record_payment};
/// use stay_engine::models::{ChargeStatus, PaymentStatus, RecurringCharge};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let charge = RecurringCharge {
///     id: "rent-1".to_string(),
///     amount: Decimal::new(1000, 0),
///     due_day_of_month: 31,
///     status: ChargeStatus::Active,
///     payment_history: vec![],
///     room_name: None,
///     tenant_name: None,
///     start_date: None,
///     end_date: None,
/// };
/// let now = NaiveDateTime::parse_from_str("2024-06-12 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let entry = PaymentEntry {
///     amount_paid: Some(Decimal::new(400, 0)),
///     payment_method: Some("cash".to_string()),
///     ..Default::default()
/// };
/// let payment = record_payment(&charge, entry, now).unwrap();
/// assert_eq!(payment.due_date.to_string(), "2024-06-30");
/// assert_eq!(payment.status, PaymentStatus::Partial);
/// assert_eq!(payment.payment_method.as_deref(), Some("cash"));
/// ```
pub fn record_payment(
    charge: &RecurringCharge,
    entry: PaymentEntry,
    now: NaiveDateTime,
) -> EngineResult<Payment> {
    let today = now.date();
    let amount_due = entry.amount_due.unwrap_or(charge.amount);
    let amount_paid = entry.amount_paid.unwrap_or(amount_due);

    for (label, amount) in [("amount_due", amount_due), ("amount_paid", amount_paid)] {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidPayment {
                charge_id: charge.id.clone(),
                message: format!("{} must be positive, got {}", label, amount),
            });
        }
    }

    let status = if amount_paid >= amount_due {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Partial
    };

    Ok(Payment {
        due_date: due_date_in_month(today, charge.due_day_of_month),
        paid_date: Some(today),
        amount_due,
        amount_paid,
        status,
        payment_method: entry.payment_method,
        notes: entry.notes,
    })
}
