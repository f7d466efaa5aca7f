//! Authorization guard for registry mutations.
//!
//! Every mutating entry point passes through this single predicate
//! before it touches storage. The check is a pure function of the
//! explicit caller and the stored owner.

use super::error::RegistryError;
use super::identity::Identity;

/// Check that `caller` is the current `owner`.
///
/// Returns `RegistryError::Unauthorized` otherwise. The guard has no
/// side effects, so it is safe to evaluate before any mutation,
/// including lazy record creation.
///
/// # Example
///
/// ```rust
/// use eventplan::core::{authorize, Identity};
///
/// let owner = Identity::new("owner").unwrap();
/// let stranger = Identity::new("stranger").unwrap();
///
/// assert!(authorize(&owner, &owner).is_ok());
/// assert!(authorize(&stranger, &owner).is_err());
/// ```
pub fn authorize(caller: &Identity, owner: &Identity) -> Result<(), RegistryError> {
    if caller == owner {
        Ok(())
    } else {
        Err(RegistryError::Unauthorized {
            caller: caller.to_string(),
            owner: owner.to_string(),
        })
    }
}
