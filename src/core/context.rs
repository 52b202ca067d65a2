//! Game context shared with effect handlers.
//!
//! The context is the single mutable surface a play action touches: the
//! two battlefield lanes (via `FieldManager`), the two player records,
//! and a logging sink for user-facing diagnostics. Handlers and hooks
//! receive `&mut GameContext`, so no component ever holds a private,
//! potentially stale copy of the battlefield across a mutating call.

use serde::{Deserialize, Serialize};

use crate::field::FieldManager;

use super::side::{Side, SideMap};

/// Per-side player record.
///
/// The deferred-bonus hook receives both players through the context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name.
    pub name: String,
    /// Remaining health.
    pub health: i64,
    /// Available mana this turn.
    pub mana: i64,
}

impl PlayerState {
    /// Create a player record with starting health.
    #[must_use]
    pub fn new(name: impl Into<String>, health: i64) -> Self {
        Self {
            name: name.into(),
            health,
            mana: 0,
        }
    }
}

/// Mutable game surface handed to primary handlers and hooks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameContext {
    /// Sole owner of battlefield mutation.
    pub field: FieldManager,

    /// The two players, indexed by side.
    pub players: SideMap<PlayerState>,

    /// User-facing log lines, in emission order.
    log: Vec<String>,
}

impl GameContext {
    /// Create a context with an empty battlefield.
    #[must_use]
    pub fn new(friendly: PlayerState, opposing: PlayerState) -> Self {
        Self {
            field: FieldManager::new(),
            players: SideMap::new(friendly, opposing),
            log: Vec::new(),
        }
    }

    /// Append a user-facing log line.
    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// All log lines emitted so far.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The player acting from `side`.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    /// Mutable access to the player on `side`.
    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }
}
