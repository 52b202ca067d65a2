//! # duelcore
//!
//! Rule-enforcement core for a turn-based two-player collectible card
//! game: target legality, safe battlefield mutation while effects chain
//! during a single action, and deferred bonuses computed before a play
//! but applied after it.
//!
//! ## Design Principles
//!
//! 1. **Legality before mutation**: a play's target is validated fully
//!    before the first mutating call; an illegal target leaves no
//!    partial state.
//!
//! 2. **Live state over cached references**: the battlefield is read
//!    through `FieldManager` accessors at the moment of use. Snapshots
//!    exist, but only as the explicit `all_creatures()` call.
//!
//! 3. **One action at a time**: the core is single-threaded and
//!    non-reentrant; the surrounding session layer serializes plays.
//!    The one piece of cross-step state - the deferred bonus slot - is
//!    cleared unconditionally when each action finishes.
//!
//! ## Modules
//!
//! - `core`: sides, instance identity, errors, the game context
//! - `abilities`: capability sets and the ability registry
//! - `cards`: card instances, definitions, and the catalog
//! - `field`: the two battlefield lanes and their mutation rules
//! - `effects`: target legality and play resolution
//!
//! Card effect *implementations*, catalog file loading, networking, and
//! UI are external collaborators: they call in through `resolve_play`,
//! `validate_target`, and the `FieldManager` operations.

pub mod abilities;
pub mod cards;
pub mod core;
pub mod effects;
pub mod field;

// Re-export commonly used types
pub use crate::core::{
    GameContext, IllegalTarget, InstanceId, PlayerState, Result, RulesError, Side, SideMap,
};

pub use crate::abilities::{AbilityDef, AbilityId, AbilityRegistry, Capability, CapabilitySet};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardKind, Color, SplashBonus};

pub use crate::field::{FieldManager, FIELD_CAPACITY};

pub use crate::effects::{
    legal_targets, validate_target, DeferredBonus, EffectResolver, ResolverHooks, Target,
};
