//! Scenario error types.

use crate::core::RegistryError;
use thiserror::Error;

/// A call did not have the expected outcome.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Call to '{entry_point}' was expected to fail but succeeded")]
    UnexpectedSuccess { entry_point: &'static str },

    #[error("Call to '{entry_point}' was expected to succeed: {source}")]
    UnexpectedRejection {
        entry_point: &'static str,
        source: RegistryError,
    },
}

/// Storage did not match a scenario expectation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Mismatch {
    #[error("Expected owner '{expected}', found '{actual}'")]
    Owner { expected: String, actual: String },

    #[error("Expected '{name}' date '{expected}', found {actual:?}")]
    Date {
        name: String,
        expected: String,
        actual: Option<String>,
    },

    #[error("Expected '{name}' to have {expected} guests, found {actual:?}")]
    NumGuests {
        name: String,
        expected: u64,
        actual: Option<u64>,
    },

    #[error("Expected no record for '{name}', but one exists")]
    Present { name: String },
}
