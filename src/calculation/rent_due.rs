//! Rent due-date assessment for recurring charges.
//!
//! Each month a charge falls due on its due day, clamped to the month's last
//! day. A charge is due for a reminder from five days before that date until
//! thirty days after it, unless a Paid payment is already recorded against a
//! due date in the current month.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::{AuditStep, RecurringCharge};

use super::day_count::{days_until, due_date_in_month};

/// How many days ahead of the due date a rent reminder starts.
pub const RENT_DUE_LOOKAHEAD_DAYS: i64 = 5;

/// How many days past the due date a rent reminder keeps showing.
pub const RENT_OVERDUE_LOOKBACK_DAYS: i64 = 30;

/// The result of assessing a charge for the current month.
#[derive(Debug, Clone)]
pub struct ChargeAssessment {
    /// This month's due date.
    pub due_date: NaiveDate,
    /// Floored days from now until the due date; negative when overdue.
    pub days_until_due: i64,
    /// Whether a Paid payment is recorded against this month.
    pub settled: bool,
    /// Whether the charge should produce a rent reminder.
    pub needs_reminder: bool,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Returns true if `days_until_due` is within the rent reminder window.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::in_rent_reminder_window;
///
/// assert!(in_rent_reminder_window(5));
/// assert!(in_rent_reminder_window(-30));
/// assert!(!in_rent_reminder_window(6));
/// assert!(!in_rent_reminder_window(-31));
/// ```
pub fn in_rent_reminder_window(days_until_due: i64) -> bool {
    (-RENT_OVERDUE_LOOKBACK_DAYS..=RENT_DUE_LOOKAHEAD_DAYS).contains(&days_until_due)
}

/// This month's due date for a charge and where `now` stands against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DueState {
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub settled: bool,
}

impl DueState {
    pub(crate) fn at(charge: &RecurringCharge, now: NaiveDateTime) -> Self {
        let today = now.date();
        let due_date = due_date_in_month(today, charge.due_day_of_month);
        DueState {
            due_date,
            days_until_due: days_until(due_date, now),
            settled: charge.is_paid_for_month(today.year(), today.month()),
        }
    }

    pub(crate) fn needs_reminder(&self) -> bool {
        !self.settled && in_rent_reminder_window(self.days_until_due)
    }
}

/// Assesses a charge's current-month due date at `now`.
///
/// Only the charge's schedule and payment history are considered; whether the
/// charge is Active is the caller's concern.
pub fn assess_charge(
    charge: &RecurringCharge,
    now: NaiveDateTime,
    step_number: u32,
) -> ChargeAssessment {
    let today = now.date();
    let DueState {
        due_date,
        days_until_due,
        settled,
    } = DueState::at(charge, now);
    let in_window = in_rent_reminder_window(days_until_due);
    let needs_reminder = in_window && !settled;

    let reasoning = if settled {
        format!(
            "Paid payment recorded for {}-{:02}, no reminder",
            today.year(),
            today.month()
        )
    } else if !in_window {
        format!(
            "Due {} is {} days away, outside the {}..={} day reminder window",
            due_date, days_until_due, -RENT_OVERDUE_LOOKBACK_DAYS, RENT_DUE_LOOKAHEAD_DAYS
        )
    } else if days_until_due < 0 {
        format!("Due {} is {} days overdue and unpaid", due_date, -days_until_due)
    } else {
        format!("Due {} in {} days and unpaid", due_date, days_until_due)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rent_due".to_string(),
        rule_name: "Rent Due".to_string(),
        subject_id: charge.id.clone(),
        input: serde_json::json!({
            "due_day_of_month": charge.due_day_of_month,
            "amount": charge.amount.normalize().to_string(),
            "payments": charge.payment_history.len(),
            "now": now.to_string()
        }),
        output: serde_json::json!({
            "due_date": due_date.to_string(),
            "days_until_due": days_until_due,
            "settled": settled,
            "needs_reminder": needs_reminder
        }),
        reasoning,
    };

    ChargeAssessment {
        due_date,
        days_until_due,
        settled,
        needs_reminder,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChargeStatus, Payment, PaymentStatus};
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn create_charge(due_day: u32, payments: Vec<Payment>) -> RecurringCharge {
        RecurringCharge {
            id: "rent-1".to_string(),
            amount: Decimal::new(1200, 0),
            due_day_of_month: due_day,
            status: ChargeStatus::Active,
            payment_history: payments,
            room_name: None,
            tenant_name: None,
            start_date: None,
            end_date: None,
        }
    }

    fn paid(due: &str) -> Payment {
        Payment {
            due_date: make_date(due),
            paid_date: Some(make_date(due)),
            amount_due: Decimal::new(1200, 0),
            amount_paid: Decimal::new(1200, 0),
            status: PaymentStatus::Paid,
            payment_method: None,
            notes: None,
        }
    }

    #[test]
    fn test_due_in_three_days_needs_reminder() {
        let charge = create_charge(10, vec![]);
        let result = assess_charge(&charge, make_datetime("2024-03-07 00:00:00"), 1);

        assert_eq!(result.due_date, make_date("2024-03-10"));
        assert_eq!(result.days_until_due, 3);
        assert!(!result.settled);
        assert!(result.needs_reminder);
    }

    #[test]
    fn test_due_in_six_days_is_too_early() {
        let charge = create_charge(10, vec![]);
        let result = assess_charge(&charge, make_datetime("2024-03-04 00:00:00"), 1);

        assert_eq!(result.days_until_due, 6);
        assert!(!result.needs_reminder);
    }

    #[test]
    fn test_paid_this_month_suppresses_reminder() {
        let charge = create_charge(10, vec![paid("2024-03-10")]);
        let result = assess_charge(&charge, make_datetime("2024-03-08 09:00:00"), 1);

        assert!(result.settled);
        assert!(!result.needs_reminder);
        assert!(result.audit_step.reasoning.contains("2024-03"));
    }

    #[test]
    fn test_paid_last_month_does_not_suppress() {
        let charge = create_charge(10, vec![paid("2024-02-10")]);
        let result = assess_charge(&charge, make_datetime("2024-03-08 09:00:00"), 1);

        assert!(!result.settled);
        assert!(result.needs_reminder);
    }

    #[test]
    fn test_due_day_31_in_april_falls_on_30th() {
        let charge = create_charge(31, vec![]);
        let result = assess_charge(&charge, make_datetime("2024-04-28 00:00:00"), 1);

        assert_eq!(result.due_date, make_date("2024-04-30"));
        assert_eq!(result.days_until_due, 2);
    }

    #[test]
    fn test_audit_step_fields() {
        let charge = create_charge(1, vec![]);
        let result = assess_charge(&charge, make_datetime("2024-03-15 00:00:00"), 7);

        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "rent_due");
        assert_eq!(result.audit_step.subject_id, "rent-1");
        assert_eq!(
            result.audit_step.output["days_until_due"].as_i64().unwrap(),
            -14
        );
        assert!(result.audit_step.reasoning.contains("14 days overdue"));
    }
}
