//! Effect system: target legality and play resolution.
//!
//! - `targeting`: the pure rule chain deciding whether a chosen target
//!   is legal (Spell Shield, Taunt, Elusive, in that fixed order)
//! - `resolver`: sequencing of one play action - primary effect,
//!   deferred splash bonus, reactive deaths
//!
//! ## Design Philosophy
//!
//! Legality is decided fully before mutation; deferred bonuses are
//! computed against pre-action state and applied after it, exactly once;
//! reactive triggers always re-query live battlefield state. The actual
//! card effects live outside this crate and are passed in as handlers
//! and hooks.

pub mod resolver;
pub mod targeting;

pub use resolver::{DeferredBonus, EffectResolver, ResolverHooks};
pub use targeting::{legal_targets, validate_target, Target};
