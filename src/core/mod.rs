//! Core registry types and logic.
//!
//! This module contains the pure building blocks of the registry:
//! - Caller identities
//! - Event records
//! - The owner authorization guard
//! - Immutable call history
//!
//! Nothing in this module performs I/O.

mod error;
mod event;
mod guard;
mod history;
mod identity;

pub use error::{IdentityError, RegistryError};
pub use event::EventRecord;
pub use guard::authorize;
pub use history::{CallHistory, CallOutcome, CallRecord};
pub use identity::Identity;
