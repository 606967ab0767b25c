//! Reminder generation for tracked documents and recurring charges.
//!
//! Reminders are fully recomputed on every call. The engine has no notion of
//! dismissal; callers filter dismissed ids back out themselves.
//!
//! Generation order is deterministic: documents before charges, input order
//! within each, and a document's expiry reminder before its renewal reminder.

use std::time::Instant;

use chrono::{Datelike, NaiveDateTime};

use crate::models::{
    AuditTrace, AuditWarning, PaymentStatus, RecurringCharge, Reminder, ReminderKind,
    TrackedDocument,
};

use super::day_count::days_until;
use super::document_status::{assess_document, refresh_statuses};
use super::rent_due::{DueState, assess_charge};

/// Days before a renewal date during which a renewal reminder is shown.
///
/// Fixed, and independent of each document's expiry reminder window.
pub const RENEWAL_WINDOW_DAYS: i64 = 7;

/// The outcome of a full reminder run: refreshed documents, reminders, and
/// the audit trace explaining them.
#[derive(Debug, Clone)]
pub struct ReminderRun {
    /// Documents with statuses recomputed at `now`, in input order.
    pub documents: Vec<TrackedDocument>,
    /// Active reminders.
    pub reminders: Vec<Reminder>,
    /// Audit trace of every document and charge assessed.
    pub audit_trace: AuditTrace,
}

fn expiry_reminder(doc: &TrackedDocument, days_until_expiry: Option<i64>) -> Option<Reminder> {
    let expiry = doc.expiry_date?;
    let days = days_until_expiry?;
    // Already-expired documents surface through their status, not a reminder
    if days > 0 && days <= i64::from(doc.reminder_window_days) {
        Some(Reminder {
            id: format!("expiry-{}", doc.id),
            subject_id: doc.id.clone(),
            subject_name: doc.name.clone(),
            due_date: expiry,
            kind: ReminderKind::DocumentExpiry,
            amount: None,
        })
    } else {
        None
    }
}

fn renewal_reminder(doc: &TrackedDocument, days_until_renewal: Option<i64>) -> Option<Reminder> {
    let renewal = doc.renewal_date?;
    let days = days_until_renewal?;
    if (0..=RENEWAL_WINDOW_DAYS).contains(&days) {
        Some(Reminder {
            id: format!("renewal-{}", doc.id),
            subject_id: doc.id.clone(),
            subject_name: doc.name.clone(),
            due_date: renewal,
            kind: ReminderKind::DocumentRenewal,
            amount: None,
        })
    } else {
        None
    }
}

fn rent_reminder(charge: &RecurringCharge, state: &DueState) -> Option<Reminder> {
    if !charge.is_active() || !state.needs_reminder() {
        return None;
    }
    Some(Reminder {
        id: format!(
            "rent-{}-{}-{:02}",
            charge.id,
            state.due_date.year(),
            state.due_date.month()
        ),
        subject_id: charge.id.clone(),
        subject_name: charge.display_name(),
        due_date: state.due_date,
        kind: ReminderKind::RentDue,
        amount: Some(charge.amount),
    })
}

/// Builds the list of active reminders at `now`.
///
/// - [`ReminderKind::DocumentExpiry`] when a document expires in more than 0
///   and at most `reminder_window_days` days
/// - [`ReminderKind::DocumentRenewal`] when a renewal date is 0 to 7 days away
/// - [`ReminderKind::RentDue`] for Active charges whose current-month due date
///   is between 30 days past and 5 days ahead, with no Paid payment recorded
///   against a due date in the current month
///
/// # Example
///
/// ```
/// use stay_engine::calculation::build_reminders;
/// use stay_engine::models::{ChargeStatus, RecurringCharge, ReminderKind};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let charge = RecurringCharge {
///     id: "r1".to_string(),
///     amount: Decimal::new(900, 0),
///     due_day_of_month: 31,
///     status: ChargeStatus::Active,
///     payment_history: vec![],
///     room_name: Some("Villa Melati".to_string()),
///     tenant_name: None,
///     start_date: None,
///     end_date: None,
/// };
///
/// let now = NaiveDateTime::parse_from_str("2024-04-27 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let reminders = build_reminders(&[], &[charge], now);
///
/// assert_eq!(reminders.len(), 1);
/// assert_eq!(reminders[0].kind, ReminderKind::RentDue);
/// assert_eq!(reminders[0].id, "rent-r1-2024-04");
/// assert_eq!(reminders[0].due_date.to_string(), "2024-04-30");
/// ```
pub fn build_reminders(
    documents: &[TrackedDocument],
    charges: &[RecurringCharge],
    now: NaiveDateTime,
) -> Vec<Reminder> {
    let mut reminders = Vec::new();

    for doc in documents {
        let days_until_expiry = doc.expiry_date.map(|d| days_until(d, now));
        let days_until_renewal = doc.renewal_date.map(|d| days_until(d, now));
        reminders.extend(expiry_reminder(doc, days_until_expiry));
        reminders.extend(renewal_reminder(doc, days_until_renewal));
    }

    for charge in charges {
        reminders.extend(rent_reminder(charge, &DueState::at(charge, now)));
    }

    reminders
}

/// Runs the whole `records -> refresh_statuses -> build_reminders` pipeline
/// with an audit trace.
///
/// Produces the same reminders as [`build_reminders`]. Additionally warns when
/// a charge has more than one Paid payment against the current month, which
/// the data model tolerates but usually means a payment was recorded twice.
pub fn run_reminders(
    documents: &[TrackedDocument],
    charges: &[RecurringCharge],
    now: NaiveDateTime,
) -> ReminderRun {
    let start_time = Instant::now();
    let mut audit_trace = AuditTrace::default();
    let mut reminders = Vec::new();

    for doc in documents {
        let assessment = assess_document(doc, now, audit_trace.next_step_number());
        reminders.extend(expiry_reminder(doc, assessment.days_until_expiry));
        reminders.extend(renewal_reminder(doc, assessment.days_until_renewal));
        audit_trace.steps.push(assessment.audit_step);
    }

    let today = now.date();
    for charge in charges.iter().filter(|c| c.is_active()) {
        let assessment = assess_charge(charge, now, audit_trace.next_step_number());
        let state = DueState {
            due_date: assessment.due_date,
            days_until_due: assessment.days_until_due,
            settled: assessment.settled,
        };
        reminders.extend(rent_reminder(charge, &state));
        audit_trace.steps.push(assessment.audit_step);

        let paid_this_month = charge
            .payments_in_month(today.year(), today.month())
            .filter(|p| p.status == PaymentStatus::Paid)
            .count();
        if paid_this_month > 1 {
            audit_trace.warnings.push(AuditWarning {
                code: "DUPLICATE_MONTH_PAYMENT".to_string(),
                message: format!(
                    "Charge '{}' has {} paid payments for {}-{:02}",
                    charge.id,
                    paid_this_month,
                    today.year(),
                    today.month()
                ),
                severity: "low".to_string(),
            });
        }
    }

    audit_trace.duration_us = start_time.elapsed().as_micros() as u64;

    ReminderRun {
        documents: refresh_statuses(documents, now),
        reminders,
        audit_trace,
    }
}
