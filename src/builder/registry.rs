//! Builder for constructing registries.

use crate::builder::error::BuildError;
use crate::core::{EventRecord, Identity};
use crate::registry::EventRegistry;
use indexmap::IndexMap;

/// Builder for constructing registries with a fluent API.
///
/// # Example
///
/// ```rust
/// use eventplan::builder::RegistryBuilder;
/// use eventplan::core::{EventRecord, Identity};
///
/// let registry = RegistryBuilder::new()
///     .owner(Identity::new("owner").unwrap())
///     .event("Meetup", EventRecord::new("11-28-2017", 80))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    owner: Option<Identity>,
    events: Vec<(String, EventRecord)>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            owner: None,
            events: Vec::new(),
        }
    }

    /// Set the initial owner (required).
    pub fn owner(mut self, owner: Identity) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Seed a pre-existing event record.
    pub fn event(mut self, name: impl Into<String>, record: EventRecord) -> Self {
        self.events.push((name.into(), record));
        self
    }

    /// Seed several event records at once.
    pub fn events<I, N>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = (N, EventRecord)>,
        N: Into<String>,
    {
        self.events
            .extend(events.into_iter().map(|(name, record)| (name.into(), record)));
        self
    }

    /// Build the registry.
    /// Returns an error if the owner is missing or an event is seeded twice.
    pub fn build(self) -> Result<EventRegistry, BuildError> {
        let owner = self.owner.ok_or(BuildError::MissingOwner)?;

        let mut events = IndexMap::with_capacity(self.events.len());
        for (name, record) in self.events {
            if events.contains_key(&name) {
                return Err(BuildError::DuplicateEvent { name });
            }
            events.insert(name, record);
        }

        Ok(EventRegistry::with_events(owner, events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> Identity {
        Identity::new(value).unwrap()
    }

    #[test]
    fn builder_creates_empty_registry() {
        let registry = RegistryBuilder::new().owner(id("owner")).build().unwrap();

        assert_eq!(registry, EventRegistry::create(id("owner")));
    }

    #[test]
    fn builder_requires_owner() {
        let result = RegistryBuilder::new()
            .event("Meetup", EventRecord::default())
            .build();

        assert_eq!(result, Err(BuildError::MissingOwner));
    }

    #[test]
    fn builder_seeds_events_in_order() {
        let registry = RegistryBuilder::new()
            .owner(id("owner"))
            .event("B", EventRecord::new("2", 2))
            .events([("A", EventRecord::new("1", 1)), ("C", EventRecord::default())])
            .build()
            .unwrap();

        let names: Vec<_> = registry.events().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(registry.event("A"), Some(&EventRecord::new("1", 1)));
    }

    #[test]
    fn builder_rejects_duplicate_events() {
        let result = RegistryBuilder::new()
            .owner(id("owner"))
            .event("Meetup", EventRecord::default())
            .event("Meetup", EventRecord::new("x", 1))
            .build();

        assert_eq!(
            result,
            Err(BuildError::DuplicateEvent {
                name: "Meetup".to_string()
            })
        );
    }

    #[test]
    fn seeded_events_update_without_reset() {
        let owner = id("owner");
        let mut registry = RegistryBuilder::new()
            .owner(owner.clone())
            .event("Meetup", EventRecord::new("11-28-2017", 80))
            .build()
            .unwrap();

        registry.set_date(&owner, "Meetup", "03-21-2019").unwrap();
        assert_eq!(
            registry.event("Meetup"),
            Some(&EventRecord::new("03-21-2019", 80))
        );
    }
}
