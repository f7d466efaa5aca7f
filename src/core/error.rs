//! Registry error types.

use thiserror::Error;

/// Errors returned by the registry's mutating entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller is not the current owner. Nothing was mutated.
    #[error("Caller '{caller}' is not the registry owner '{owner}'")]
    Unauthorized { caller: String, owner: String },
}

/// Errors that can occur when constructing an identity
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identity must not be empty")]
    Empty,
}
