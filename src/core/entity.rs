//! Instance identity for card copies in play.
//!
//! Two copies of the same card are distinct entities: every structural
//! operation on the battlefield keys on `InstanceId`, never on name
//! equality. IDs are allocated by the card catalog when a definition is
//! instantiated and are never reused within a game.

use serde::{Deserialize, Serialize};

/// Unique identifier for a specific card copy in play.
///
/// Distinct from the card's name/definition: two "River Crab" copies on
/// the battlefield carry different `InstanceId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}
