//! Call history tracking.
//!
//! Provides an immutable, ordered log of submitted entry point calls and
//! their outcomes. The log is kept beside the registry, never inside it,
//! so recording a rejected call does not count as a registry mutation.

use super::identity::Identity;
use crate::entry::EntryPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Outcome of a submitted call.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallOutcome {
    /// The call passed authorization and was applied
    Accepted,
    /// The call was rejected and nothing was applied
    Rejected { reason: String },
}

impl CallOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Record of a single submitted call.
///
/// # Example
///
/// ```rust
/// use eventplan::core::{CallOutcome, CallRecord, Identity};
/// use eventplan::entry::SetDate;
///
/// let record = CallRecord::new(
///     Identity::new("owner").unwrap(),
///     SetDate::new("Meetup", "11-28-2017").into(),
///     CallOutcome::Accepted,
/// );
/// assert!(record.outcome.is_accepted());
/// assert!(record.label.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique call identifier
    pub id: Uuid,
    /// Optional human-readable step label
    pub label: Option<String>,
    /// Identity that submitted the call
    pub sender: Identity,
    /// The entry point and its arguments
    pub entry: EntryPoint,
    /// Whether the call was applied
    pub outcome: CallOutcome,
    /// When the call was submitted
    pub timestamp: DateTime<Utc>,
}

impl CallRecord {
    /// Create a record stamped with a fresh id and the current time.
    pub fn new(sender: Identity, entry: EntryPoint, outcome: CallOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: None,
            sender,
            entry,
            outcome,
            timestamp: Utc::now(),
        }
    }

    /// Attach a step label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Ordered history of submitted calls.
///
/// History is immutable - the `record` method returns a new history
/// with the call added.
///
/// # Example
///
/// ```rust
/// use eventplan::core::{CallHistory, CallOutcome, CallRecord, Identity};
/// use eventplan::entry::SetNumGuests;
///
/// let owner = Identity::new("owner").unwrap();
/// let history = CallHistory::new();
/// let history = history.record(CallRecord::new(
///     owner,
///     SetNumGuests::new("Meetup", 80).into(),
///     CallOutcome::Accepted,
/// ));
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.accepted().count(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CallHistory {
    records: Vec<CallRecord>,
}

impl CallHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a call, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, record: CallRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all records in submission order.
    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    /// Iterate over calls that were applied.
    pub fn accepted(&self) -> impl Iterator<Item = &CallRecord> {
        self.records.iter().filter(|r| r.outcome.is_accepted())
    }

    /// Iterate over calls that were rejected.
    pub fn rejected(&self) -> impl Iterator<Item = &CallRecord> {
        self.records.iter().filter(|r| !r.outcome.is_accepted())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Calculate total duration from first to last call.
    ///
    /// Returns `None` if there are no calls.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
