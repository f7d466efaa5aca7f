//! Entry point requests.
//!
//! Each externally invocable operation has its own request struct with
//! named, typed fields. [`EntryPoint`] wraps them for dispatch and
//! [`Call`] pairs a request with the identity submitting it.

use crate::core::Identity;
use serde::{Deserialize, Serialize};

/// Request to set the date of a named event.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SetDate {
    pub name: String,
    pub new_date: String,
}

impl SetDate {
    pub fn new(name: impl Into<String>, new_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            new_date: new_date.into(),
        }
    }
}

/// Request to set the guest count of a named event.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SetNumGuests {
    pub name: String,
    pub new_num_guests: u64,
}

impl SetNumGuests {
    pub fn new(name: impl Into<String>, new_num_guests: u64) -> Self {
        Self {
            name: name.into(),
            new_num_guests,
        }
    }
}

/// Request to hand the registry to a new owner.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChangeOwner {
    pub new_owner: Identity,
}

impl ChangeOwner {
    pub fn new(new_owner: Identity) -> Self {
        Self { new_owner }
    }
}

/// One of the registry's mutating entry points.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "entry_point", rename_all = "snake_case")]
pub enum EntryPoint {
    SetDate(SetDate),
    SetNumGuests(SetNumGuests),
    ChangeOwner(ChangeOwner),
}

impl EntryPoint {
    /// Entry point name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetDate(_) => "set_date",
            Self::SetNumGuests(_) => "set_num_guests",
            Self::ChangeOwner(_) => "change_owner",
        }
    }

    /// Event key this entry point references, if any.
    pub fn event_name(&self) -> Option<&str> {
        match self {
            Self::SetDate(req) => Some(&req.name),
            Self::SetNumGuests(req) => Some(&req.name),
            Self::ChangeOwner(_) => None,
        }
    }
}

impl From<SetDate> for EntryPoint {
    fn from(req: SetDate) -> Self {
        Self::SetDate(req)
    }
}

impl From<SetNumGuests> for EntryPoint {
    fn from(req: SetNumGuests) -> Self {
        Self::SetNumGuests(req)
    }
}

impl From<ChangeOwner> for EntryPoint {
    fn from(req: ChangeOwner) -> Self {
        Self::ChangeOwner(req)
    }
}

/// An entry point invocation submitted by `sender`.
///
/// The sender is always explicit; the registry never consults ambient
/// caller state.
///
/// # Example
///
/// ```rust
/// use eventplan::core::Identity;
/// use eventplan::entry::{Call, SetDate};
///
/// let owner = Identity::new("owner").unwrap();
/// let call = Call::new(owner, SetDate::new("Meetup", "11-28-2017"));
///
/// assert_eq!(call.entry.name(), "set_date");
/// assert_eq!(call.entry.event_name(), Some("Meetup"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Call {
    pub sender: Identity,
    pub entry: EntryPoint,
}

impl Call {
    pub fn new(sender: Identity, entry: impl Into<EntryPoint>) -> Self {
        Self {
            sender,
            entry: entry.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> Identity {
        Identity::new(value).unwrap()
    }

    #[test]
    fn entry_point_names_match_operations() {
        assert_eq!(EntryPoint::from(SetDate::new("a", "d")).name(), "set_date");
        assert_eq!(
            EntryPoint::from(SetNumGuests::new("a", 1)).name(),
            "set_num_guests"
        );
        assert_eq!(
            EntryPoint::from(ChangeOwner::new(id("bob"))).name(),
            "change_owner"
        );
    }

    #[test]
    fn change_owner_references_no_event() {
        assert_eq!(
            EntryPoint::from(ChangeOwner::new(id("bob"))).event_name(),
            None
        );
        assert_eq!(
            EntryPoint::from(SetNumGuests::new("Meetup", 3)).event_name(),
            Some("Meetup")
        );
    }

    #[test]
    fn entry_point_serializes_with_tag() {
        let entry = EntryPoint::from(SetNumGuests::new("Meetup", 80));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["entry_point"], "set_num_guests");
        assert_eq!(json["name"], "Meetup");
        assert_eq!(json["new_num_guests"], 80);
    }

    #[test]
    fn call_parses_from_json() {
        let json = r#"{
            "sender": "tz1-firstOwner-address-1234",
            "entry": {"entry_point": "change_owner", "new_owner": "tz1-secondOwner-address-5678"}
        }"#;

        let call: Call = serde_json::from_str(json).unwrap();
        assert_eq!(call.sender, id("tz1-firstOwner-address-1234"));
        assert_eq!(
            call.entry,
            EntryPoint::ChangeOwner(ChangeOwner::new(id("tz1-secondOwner-address-5678")))
        );
    }

    #[test]
    fn call_with_empty_sender_is_rejected() {
        let json = r#"{"sender": "", "entry": {"entry_point": "set_date", "name": "a", "new_date": "b"}}"#;
        assert!(serde_json::from_str::<Call>(json).is_err());
    }
}
