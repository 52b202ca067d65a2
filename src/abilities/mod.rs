//! Ability system: capability sets and the ability registry.
//!
//! ## Key Types
//!
//! - `Capability`: A named behavioral rule (Taunt, Spell Shield, Elusive,
//!   parametrized spell damage)
//! - `CapabilitySet`: The capabilities one ability grants
//! - `AbilityRegistry`: Identifier lookup, loaded once from static data
//!
//! ## Design Philosophy
//!
//! Legality rules consult structured capability sets, never ability
//! display text. Unknown identifiers resolve to the empty set rather
//! than failing: a card without a recognized ability simply has no
//! special rules.

pub mod capability;
pub mod registry;

pub use capability::{Capability, CapabilitySet};
pub use registry::{AbilityDef, AbilityId, AbilityRegistry};
