//! Document status derivation.
//!
//! A document's status is a function of its expiry date and "now". Documents
//! without an expiry date are treated as valid indefinitely and keep whatever
//! status was last set on them.

use chrono::NaiveDateTime;

use crate::models::{AuditStep, DocumentStatus, TrackedDocument};

use super::day_count::days_until;

/// The result of assessing one document against the current time.
#[derive(Debug, Clone)]
pub struct DocumentAssessment {
    /// The derived (or retained) status.
    pub status: DocumentStatus,
    /// Floored days until expiry, if the document has an expiry date.
    pub days_until_expiry: Option<i64>,
    /// Floored days until renewal, if the document has a renewal date.
    pub days_until_renewal: Option<i64>,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Maps days-until-expiry to a status for the given reminder window.
fn status_for(days_until_expiry: i64, reminder_window_days: u32) -> DocumentStatus {
    if days_until_expiry < 0 {
        DocumentStatus::Expired
    } else if days_until_expiry <= i64::from(reminder_window_days) {
        DocumentStatus::ExpiringSoon
    } else {
        DocumentStatus::Active
    }
}

/// Derives a document's status at `now`.
///
/// - fewer than 0 days until expiry: [`DocumentStatus::Expired`]
/// - 0 up to and including the reminder window: [`DocumentStatus::ExpiringSoon`]
/// - otherwise: [`DocumentStatus::Active`]
/// - no expiry date: the stored status, unchanged
///
/// # Example
///
/// ```
/// use stay_engine::calculation::derive_document_status;
/// use stay_engine::models::{DocumentKind, DocumentStatus, TrackedDocument};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let doc = TrackedDocument {
///     id: "doc-1".to_string(),
///     name: "Pool safety certificate".to_string(),
///     kind: DocumentKind::Certificate,
///     expiry_date: NaiveDate::from_ymd_opt(2024, 4, 10),
///     renewal_date: None,
///     reminder_window_days: 30,
///     status: DocumentStatus::Active,
///     property_id: None,
///     notes: None,
/// };
///
/// let now = NaiveDateTime::parse_from_str("2024-03-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(derive_document_status(&doc, now), DocumentStatus::Active);
/// ```
pub fn derive_document_status(doc: &TrackedDocument, now: NaiveDateTime) -> DocumentStatus {
    match doc.expiry_date {
        Some(expiry) => status_for(days_until(expiry, now), doc.reminder_window_days),
        None => doc.status,
    }
}

/// Assesses a document and records an audit step for the decision.
pub fn assess_document(
    doc: &TrackedDocument,
    now: NaiveDateTime,
    step_number: u32,
) -> DocumentAssessment {
    let days_until_expiry = doc.expiry_date.map(|d| days_until(d, now));
    let days_until_renewal = doc.renewal_date.map(|d| days_until(d, now));
    let status = derive_document_status(doc, now);

    let reasoning = match days_until_expiry {
        Some(days) if days < 0 => format!("Expired {} days ago", -days),
        Some(days) => format!(
            "{} days until expiry against a {} day reminder window",
            days, doc.reminder_window_days
        ),
        None => format!("No expiry date, keeping status {:?}", doc.status),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "document_status".to_string(),
        rule_name: "Document Status".to_string(),
        subject_id: doc.id.clone(),
        input: serde_json::json!({
            "expiry_date": doc.expiry_date.map(|d| d.to_string()),
            "renewal_date": doc.renewal_date.map(|d| d.to_string()),
            "reminder_window_days": doc.reminder_window_days,
            "now": now.to_string()
        }),
        output: serde_json::json!({
            "status": status,
            "days_until_expiry": days_until_expiry,
            "days_until_renewal": days_until_renewal
        }),
        reasoning,
    };

    DocumentAssessment {
        status,
        days_until_expiry,
        days_until_renewal,
        audit_step,
    }
}

/// Returns copies of `documents` with their statuses recomputed at `now`.
///
/// This is the "derive statuses" stage of the
/// `records -> refresh_statuses -> build_reminders` pipeline. Input order is kept.
pub fn refresh_statuses(documents: &[TrackedDocument], now: NaiveDateTime) -> Vec<TrackedDocument> {
    documents
        .iter()
        .map(|doc| TrackedDocument {
            status: derive_document_status(doc, now),
            ..doc.clone()
        })
        .collect()
}
