//! Checkpoint and restore for registry storage.
//!
//! A checkpoint captures the owner and every event record so a host can
//! persist the registry and load it again later. Only the current format
//! version is accepted; there is no migration between versions.

use crate::registry::EventRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of registry storage.
///
/// # Example
///
/// ```rust
/// use eventplan::checkpoint::Checkpoint;
/// use eventplan::core::Identity;
/// use eventplan::EventRegistry;
///
/// let owner = Identity::new("owner").unwrap();
/// let mut registry = EventRegistry::create(owner.clone());
/// registry.set_num_guests(&owner, "Meetup", 80).unwrap();
///
/// let json = Checkpoint::capture(&registry).to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap().restore();
/// assert_eq!(restored, registry);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Registry storage at capture time
    pub registry: EventRegistry,
}

impl Checkpoint {
    /// Capture the current storage of `registry`.
    pub fn capture(registry: &EventRegistry) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            registry: registry.clone(),
        };
        tracing::info!(
            checkpoint = %checkpoint.id,
            events = registry.len(),
            "registry checkpoint captured"
        );
        checkpoint
    }

    /// Consume the checkpoint, returning the registry it holds.
    pub fn restore(self) -> EventRegistry {
        tracing::info!(checkpoint = %self.id, "registry restored from checkpoint");
        self.registry
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    /// Serialize to compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from binary form, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}
