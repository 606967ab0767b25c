//! Tracked property document model.
//!
//! Licences, permits, insurance policies and the like carry expiry and renewal
//! dates. Their status is derived state: it is recomputed from the expiry date
//! and overwrites whatever was stored before.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Reminder window used when a document record does not set one.
pub const DEFAULT_REMINDER_WINDOW_DAYS: u32 = 30;

/// The category of a property document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Operating or business licence.
    #[default]
    License,
    /// Building or usage permit.
    Permit,
    /// Insurance policy.
    Insurance,
    /// Lease or service contract.
    Contract,
    /// Safety or compliance certificate.
    Certificate,
    /// Anything else.
    Other,
}

/// The validity status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Valid and not close to expiry.
    #[default]
    Active,
    /// Within the reminder window of its expiry date.
    ExpiringSoon,
    /// Past its expiry date.
    Expired,
    /// Marked as renewed by an operator. Only kept while the document has no
    /// expiry date to derive a status from.
    Renewed,
}

/// A property document whose expiry and renewal dates are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedDocument {
    /// Unique identifier for the document.
    pub id: String,
    /// Display name of the document.
    pub name: String,
    /// Document category.
    #[serde(default)]
    pub kind: DocumentKind,
    /// Date after which the document is no longer valid.
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    /// Date by which the document should be renewed.
    #[serde(default)]
    pub renewal_date: Option<NaiveDate>,
    /// Days before expiry during which the document counts as expiring soon.
    #[serde(default = "default_reminder_window_days")]
    pub reminder_window_days: u32,
    /// Last derived or manually set status.
    #[serde(default)]
    pub status: DocumentStatus,
    /// The property this document belongs to.
    #[serde(default)]
    pub property_id: Option<String>,
    /// Free-form operator notes.
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_reminder_window_days() -> u32 {
    DEFAULT_REMINDER_WINDOW_DAYS
}

impl TrackedDocument {
    /// Checks the record before it is handed to the reminder engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDocument`] when the reminder window is
    /// zero or the document has no name.
    pub fn validate(&self) -> EngineResult<()> {
        if self.reminder_window_days == 0 {
            return Err(EngineError::InvalidDocument {
                document_id: self.id.clone(),
                message: "reminder window must be at least one day".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidDocument {
                document_id: self.id.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
