//! Eventplan: a single-owner event registry state machine
//!
//! The registry holds one owner identity and a map of named events, each
//! with a date and a guest count. Every mutation passes through the same
//! owner check before it touches storage; the owner can hand the registry
//! to someone else.
//!
//! # Core Concepts
//!
//! - **Identity**: Opaque, non-empty caller token compared for equality
//! - **Guard**: The `caller == owner` predicate gating every entry point
//! - **Lazy creation**: A record is created with defaults the first time an
//!   authorized call names it
//! - **History**: Immutable log of submitted calls, kept beside the registry
//!
//! # Example
//!
//! ```rust
//! use eventplan::core::{EventRecord, Identity};
//! use eventplan::entry::{Call, ChangeOwner, SetDate, SetNumGuests};
//! use eventplan::EventRegistry;
//!
//! let first = Identity::new("tz1-firstOwner-address-1234").unwrap();
//! let second = Identity::new("tz1-secondOwner-address-5678").unwrap();
//! let mut registry = EventRegistry::create(first.clone());
//!
//! registry.apply(Call::new(first.clone(), SetDate::new("Meetup", "11-28-2017"))).unwrap();
//! registry.apply(Call::new(first.clone(), SetNumGuests::new("Meetup", 80))).unwrap();
//! registry.apply(Call::new(first.clone(), ChangeOwner::new(second.clone()))).unwrap();
//!
//! assert!(registry.set_date(&first, "Meetup", "10-15-2018").is_err());
//! assert_eq!(registry.owner(), &second);
//! assert_eq!(registry.event("Meetup"), Some(&EventRecord::new("11-28-2017", 80)));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod entry;
pub mod registry;
pub mod scenario;

// Re-export commonly used types
pub use core::{EventRecord, Identity, RegistryError};
pub use entry::{Call, EntryPoint};
pub use registry::EventRegistry;
