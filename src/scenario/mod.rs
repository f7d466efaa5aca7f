//! Scripted test scenarios against a registry.
//!
//! A [`Scenario`] submits calls in order, records each one in a
//! [`CallHistory`], and checks whether the call was expected to be
//! accepted or rejected. [`Scenario::verify`] then inspects storage and
//! reports every mismatch at once using `Validation`, instead of
//! stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use eventplan::core::Identity;
//! use eventplan::entry::{Call, SetDate};
//! use eventplan::scenario::{Expect, Expectation, Scenario};
//! use eventplan::EventRegistry;
//!
//! let owner = Identity::new("owner").unwrap();
//! let stranger = Identity::new("stranger").unwrap();
//! let mut scenario = Scenario::new(EventRegistry::create(owner.clone()));
//!
//! scenario
//!     .section("Owner sets the date")
//!     .run(Call::new(owner, SetDate::new("Meetup", "11-28-2017")), Expect::Valid)
//!     .unwrap();
//! scenario
//!     .run(Call::new(stranger, SetDate::new("Meetup", "never")), Expect::Invalid)
//!     .unwrap();
//!
//! let result = scenario.verify(&[Expectation::date("Meetup", "11-28-2017")]);
//! assert!(result.is_success());
//! ```

mod error;

pub use error::{Mismatch, ScenarioError};

use crate::core::{CallHistory, CallOutcome, CallRecord, Identity, RegistryError};
use crate::entry::Call;
use crate::registry::EventRegistry;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Expected outcome of a scenario call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// The call must be accepted
    Valid,
    /// The call must be rejected
    Invalid,
}

/// A storage check evaluated by [`Scenario::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    Owner(Identity),
    Date { name: String, date: String },
    NumGuests { name: String, num_guests: u64 },
    Absent { name: String },
}

impl Expectation {
    pub fn owner(owner: Identity) -> Self {
        Self::Owner(owner)
    }

    pub fn date(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self::Date {
            name: name.into(),
            date: date.into(),
        }
    }

    pub fn num_guests(name: impl Into<String>, num_guests: u64) -> Self {
        Self::NumGuests {
            name: name.into(),
            num_guests,
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self::Absent { name: name.into() }
    }

    fn check(&self, registry: &EventRegistry) -> Validation<(), NonEmptyVec<Mismatch>> {
        let mismatch = match self {
            Self::Owner(expected) if registry.owner() != expected => Some(Mismatch::Owner {
                expected: expected.to_string(),
                actual: registry.owner().to_string(),
            }),
            Self::Date { name, date } => {
                let actual = registry.event(name).map(|r| r.date.clone());
                (actual.as_ref() != Some(date)).then(|| Mismatch::Date {
                    name: name.clone(),
                    expected: date.clone(),
                    actual,
                })
            }
            Self::NumGuests { name, num_guests } => {
                let actual = registry.event(name).map(|r| r.num_guests);
                (actual != Some(*num_guests)).then(|| Mismatch::NumGuests {
                    name: name.clone(),
                    expected: *num_guests,
                    actual,
                })
            }
            Self::Absent { name } if registry.contains(name) => {
                Some(Mismatch::Present { name: name.clone() })
            }
            _ => None,
        };

        match mismatch {
            Some(mismatch) => Validation::fail(mismatch),
            None => Validation::success(()),
        }
    }
}

/// Ordered sequence of calls against one registry.
#[derive(Debug, Clone)]
pub struct Scenario {
    registry: EventRegistry,
    history: CallHistory,
    label: Option<String>,
}

impl Scenario {
    pub fn new(registry: EventRegistry) -> Self {
        Self {
            registry,
            history: CallHistory::new(),
            label: None,
        }
    }

    /// Label the next submitted call.
    pub fn section(&mut self, title: impl Into<String>) -> &mut Self {
        let title = title.into();
        tracing::info!(section = %title, "scenario section");
        self.label = Some(title);
        self
    }

    /// Submit a call and record its outcome, returning the registry's result.
    pub fn submit(&mut self, call: Call) -> Result<(), RegistryError> {
        let sender = call.sender.clone();
        let entry = call.entry.clone();
        let result = self.registry.apply(call);

        let outcome = match &result {
            Ok(()) => CallOutcome::Accepted,
            Err(e) => CallOutcome::Rejected {
                reason: e.to_string(),
            },
        };
        let mut record = CallRecord::new(sender, entry, outcome);
        if let Some(label) = self.label.take() {
            record = record.with_label(label);
        }
        self.history = self.history.record(record);

        result
    }

    /// Submit a call and check it against the expected outcome.
    pub fn run(&mut self, call: Call, expect: Expect) -> Result<(), ScenarioError> {
        let entry_point = call.entry.name();
        match (self.submit(call), expect) {
            (Ok(()), Expect::Valid) | (Err(_), Expect::Invalid) => Ok(()),
            (Ok(()), Expect::Invalid) => Err(ScenarioError::UnexpectedSuccess { entry_point }),
            (Err(source), Expect::Valid) => Err(ScenarioError::UnexpectedRejection {
                entry_point,
                source,
            }),
        }
    }

    /// Check storage against every expectation, accumulating ALL mismatches.
    pub fn verify(&self, expectations: &[Expectation]) -> Validation<(), NonEmptyVec<Mismatch>> {
        let checks: Vec<Validation<(), NonEmptyVec<Mismatch>>> = expectations
            .iter()
            .map(|expectation| expectation.check(&self.registry))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn history(&self) -> &CallHistory {
        &self.history
    }

    pub fn into_registry(self) -> EventRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ChangeOwner, SetNumGuests};

    fn id(value: &str) -> Identity {
        Identity::new(value).unwrap()
    }

    fn scenario() -> (Scenario, Identity) {
        let owner = id("owner");
        (Scenario::new(EventRegistry::create(owner.clone())), owner)
    }

    #[test]
    fn run_accepts_expected_outcomes() {
        let (mut scenario, owner) = scenario();

        scenario
            .run(
                Call::new(owner, SetNumGuests::new("Meetup", 80)),
                Expect::Valid,
            )
            .unwrap();
        scenario
            .run(
                Call::new(id("mallory"), SetNumGuests::new("Meetup", 0)),
                Expect::Invalid,
            )
            .unwrap();

        assert_eq!(scenario.history().accepted().count(), 1);
        assert_eq!(scenario.history().rejected().count(), 1);
    }

    #[test]
    fn run_reports_unexpected_success() {
        let (mut scenario, owner) = scenario();

        let result = scenario.run(
            Call::new(owner.clone(), ChangeOwner::new(owner)),
            Expect::Invalid,
        );

        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedSuccess {
                entry_point: "change_owner"
            })
        ));
    }

    #[test]
    fn run_reports_unexpected_rejection() {
        let (mut scenario, _owner) = scenario();

        let result = scenario.run(
            Call::new(id("mallory"), SetNumGuests::new("Meetup", 1)),
            Expect::Valid,
        );

        match result {
            Err(ScenarioError::UnexpectedRejection {
                entry_point,
                source,
            }) => {
                assert_eq!(entry_point, "set_num_guests");
                assert!(matches!(source, RegistryError::Unauthorized { .. }));
            }
            other => panic!("Expected UnexpectedRejection, got {:?}", other),
        }
    }

    #[test]
    fn section_labels_only_the_next_call() {
        let (mut scenario, owner) = scenario();

        scenario
            .section("Set guests")
            .submit(Call::new(owner.clone(), SetNumGuests::new("Meetup", 3)))
            .unwrap();
        scenario
            .submit(Call::new(owner, SetNumGuests::new("Meetup", 4)))
            .unwrap();

        let labels: Vec<_> = scenario
            .history()
            .records()
            .iter()
            .map(|r| r.label.clone())
            .collect();
        assert_eq!(labels, vec![Some("Set guests".to_string()), None]);
    }

    #[test]
    fn rejected_calls_record_reason() {
        let (mut scenario, _owner) = scenario();
        let _ = scenario.submit(Call::new(id("mallory"), SetNumGuests::new("Meetup", 3)));

        let record = &scenario.history().records()[0];
        match &record.outcome {
            CallOutcome::Rejected { reason } => assert!(reason.contains("mallory")),
            CallOutcome::Accepted => panic!("Expected rejection"),
        }
        assert!(scenario.registry().is_empty());
    }

    #[test]
    fn verify_accumulates_all_mismatches() {
        let (mut scenario, owner) = scenario();
        scenario
            .submit(Call::new(owner, SetNumGuests::new("Meetup", 80)))
            .unwrap();

        let result = scenario.verify(&[
            Expectation::owner(id("someone-else")),
            Expectation::date("Meetup", "11-28-2017"),
            Expectation::num_guests("Meetup", 80),
            Expectation::absent("Meetup"),
            Expectation::num_guests("Missing", 0),
        ]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| matches!(e, Mismatch::Owner { .. })));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    Mismatch::Date { actual: Some(date), .. } if date.is_empty()
                )));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, Mismatch::Present { name } if name == "Meetup")));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, Mismatch::NumGuests { actual: None, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn verify_succeeds_when_storage_matches() {
        let (scenario, owner) = scenario();

        let result = scenario.verify(&[Expectation::owner(owner), Expectation::absent("Meetup")]);
        assert!(result.is_success());
    }

    #[test]
    fn verify_with_no_expectations_succeeds() {
        let (scenario, _owner) = scenario();
        assert!(scenario.verify(&[]).is_success());
    }
}
