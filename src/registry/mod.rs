//! Single-owner event registry.
//!
//! The registry holds an owner identity and a map from event name to
//! [`EventRecord`]. Every mutation is gated by [`authorize`]; records are
//! created with defaults the first time an authorized call names them.

use crate::core::{authorize, EventRecord, Identity, RegistryError};
use crate::entry::{Call, ChangeOwner, EntryPoint, SetDate, SetNumGuests};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Owner-gated registry of named events.
///
/// Operations are atomic: each either applies fully or fails with
/// `RegistryError::Unauthorized` and leaves every field untouched,
/// including not materializing a record for an unseen name.
///
/// # Example
///
/// ```rust
/// use eventplan::core::{EventRecord, Identity};
/// use eventplan::EventRegistry;
///
/// let owner = Identity::new("owner").unwrap();
/// let mut registry = EventRegistry::create(owner.clone());
///
/// registry.set_date(&owner, "Meetup", "11-28-2017").unwrap();
/// assert_eq!(
///     registry.event("Meetup"),
///     Some(&EventRecord::new("11-28-2017", 0))
/// );
///
/// let stranger = Identity::new("stranger").unwrap();
/// assert!(registry.set_num_guests(&stranger, "Other", 5).is_err());
/// assert!(registry.event("Other").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EventRegistry {
    owner: Identity,
    events: IndexMap<String, EventRecord>,
}

impl EventRegistry {
    /// Create a registry owned by `initial_owner` with no events.
    pub fn create(initial_owner: Identity) -> Self {
        Self {
            owner: initial_owner,
            events: IndexMap::new(),
        }
    }

    /// Alias for [`EventRegistry::create`].
    pub fn new(initial_owner: Identity) -> Self {
        Self::create(initial_owner)
    }

    pub(crate) fn with_events(owner: Identity, events: IndexMap<String, EventRecord>) -> Self {
        Self { owner, events }
    }

    /// Set the date of `name`, creating the record first if needed.
    pub fn set_date(
        &mut self,
        caller: &Identity,
        name: impl Into<String>,
        new_date: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        self.guard(caller, "set_date", Some(name.as_str()))?;

        self.ensure_event(&name).date = new_date.into();
        tracing::debug!(entry_point = "set_date", event = %name, caller = %caller, "event date set");
        Ok(())
    }

    /// Set the guest count of `name`, creating the record first if needed.
    pub fn set_num_guests(
        &mut self,
        caller: &Identity,
        name: impl Into<String>,
        new_num_guests: u64,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        self.guard(caller, "set_num_guests", Some(name.as_str()))?;

        self.ensure_event(&name).num_guests = new_num_guests;
        tracing::debug!(
            entry_point = "set_num_guests",
            event = %name,
            caller = %caller,
            num_guests = new_num_guests,
            "event guest count set"
        );
        Ok(())
    }

    /// Replace the owner unconditionally.
    ///
    /// Handing the registry to the current owner is allowed and is a no-op.
    pub fn change_owner(
        &mut self,
        caller: &Identity,
        new_owner: Identity,
    ) -> Result<(), RegistryError> {
        self.guard(caller, "change_owner", None)?;

        tracing::debug!(
            entry_point = "change_owner",
            caller = %caller,
            new_owner = %new_owner,
            "owner changed"
        );
        self.owner = new_owner;
        Ok(())
    }

    /// Dispatch a typed entry point request on behalf of `caller`.
    pub fn dispatch(&mut self, caller: &Identity, entry: EntryPoint) -> Result<(), RegistryError> {
        match entry {
            EntryPoint::SetDate(SetDate { name, new_date }) => {
                self.set_date(caller, name, new_date)
            }
            EntryPoint::SetNumGuests(SetNumGuests {
                name,
                new_num_guests,
            }) => self.set_num_guests(caller, name, new_num_guests),
            EntryPoint::ChangeOwner(ChangeOwner { new_owner }) => {
                self.change_owner(caller, new_owner)
            }
        }
    }

    /// Apply a submitted call.
    pub fn apply(&mut self, call: Call) -> Result<(), RegistryError> {
        let Call { sender, entry } = call;
        self.dispatch(&sender, entry)
    }

    /// Current owner
    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// Look up a record; `None` if the name was never referenced.
    pub fn event(&self, name: &str) -> Option<&EventRecord> {
        self.events.get(name)
    }

    /// Check whether a record exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Iterate over records in the order they were created.
    pub fn events(&self) -> impl Iterator<Item = (&str, &EventRecord)> {
        self.events.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn guard(
        &self,
        caller: &Identity,
        entry_point: &'static str,
        event: Option<&str>,
    ) -> Result<(), RegistryError> {
        authorize(caller, &self.owner).inspect_err(|_| {
            tracing::warn!(
                entry_point,
                event = event.unwrap_or_default(),
                caller = %caller,
                owner = %self.owner,
                "unauthorized call rejected"
            );
        })
    }

    // Only reachable after the guard has passed.
    fn ensure_event(&mut self, name: &str) -> &mut EventRecord {
        self.events.entry(name.to_string()).or_default()
    }
}
