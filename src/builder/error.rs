//! Build errors for the registry builder.

use thiserror::Error;

/// Errors that can occur when building a registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Owner not specified. Call .owner(identity) before .build()")]
    MissingOwner,

    #[error("Event '{name}' was seeded more than once")]
    DuplicateEvent { name: String },
}
