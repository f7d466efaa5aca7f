//! Builder API for configuring a registry's initial storage.
//!
//! [`EventRegistry::create`](crate::EventRegistry::create) covers the common
//! case of an empty registry. The builder is for hosts that start from
//! pre-existing storage, such as a genesis configuration with events
//! already scheduled.

pub mod error;
pub mod registry;

pub use error::BuildError;
pub use registry::RegistryBuilder;
