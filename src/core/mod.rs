//! Core types: sides, instance identity, errors, and the game context.
//!
//! These are the building blocks the rule components share. The game is
//! strictly two-player and single-threaded: one play action resolves
//! fully before the next is admitted.

pub mod context;
pub mod entity;
pub mod error;
pub mod side;

pub use context::{GameContext, PlayerState};
pub use entity::InstanceId;
pub use error::{IllegalTarget, Result, RulesError};
pub use side::{Side, SideMap};
