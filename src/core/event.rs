//! Event records held by the registry.

use serde::{Deserialize, Serialize};

/// Date and guest count for a named event.
///
/// Records have no identity of their own; they exist only as values in
/// the registry's map. A freshly created record holds an empty date and
/// zero guests.
///
/// # Example
///
/// ```rust
/// use eventplan::core::EventRecord;
///
/// let record = EventRecord::default();
/// assert_eq!(record.date, "");
/// assert_eq!(record.num_guests, 0);
/// assert!(record.is_default());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct EventRecord {
    /// Free-form date string
    pub date: String,
    /// Expected number of guests
    pub num_guests: u64,
}

impl EventRecord {
    /// Create a record with both fields set.
    pub fn new(date: impl Into<String>, num_guests: u64) -> Self {
        Self {
            date: date.into(),
            num_guests,
        }
    }

    /// Check if the record still holds its creation defaults.
    pub fn is_default(&self) -> bool {
        self.date.is_empty() && self.num_guests == 0
    }
}
