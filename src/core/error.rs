//! Error types for the rules core.
//!
//! Legality and structural failures are ordinary values the calling play
//! pipeline can present to the user ("Must attack Taunt creatures first")
//! without aborting the session. Nothing in the game path panics.
//!
//! Note the absence of an "unknown ability" variant: an ability ID the
//! registry does not know resolves to the empty capability set by design.

use thiserror::Error;

use super::entity::InstanceId;

/// Reason a chosen target is illegal.
///
/// Produced by the target validator; the `Display` text is user-facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalTarget {
    /// Spells cannot target a creature whose Spell Shield is up.
    #[error("that creature is protected by Spell Shield")]
    SpellShieldBlocked,

    /// The defending side controls an un-attacked Taunt creature.
    #[error("must attack Taunt creatures first")]
    TauntMustBeAttackedFirst,

    /// Elusive creatures cannot be chosen as attack targets.
    #[error("Elusive creatures cannot be attacked")]
    ElusiveCannotBeAttacked,
}

/// Errors produced by the rules core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The battlefield already holds the maximum number of creatures.
    #[error("the battlefield is full")]
    FieldFull,

    /// No creature with this instance identity is on the battlefield.
    #[error("creature {0} is not on the battlefield")]
    CreatureNotFound(InstanceId),

    /// The chosen target violates a targeting rule.
    #[error("illegal target: {0}")]
    IllegalTarget(#[from] IllegalTarget),

    /// A catalog entry failed validation at registration time.
    #[error("malformed card definition: {0}")]
    MalformedCard(String),

    /// A definition with this name is already in the catalog.
    #[error("card definition already registered: {0}")]
    DuplicateDefinition(String),

    /// No catalog definition with this name.
    #[error("unknown card name: {0}")]
    UnknownCard(String),

    /// An external effect handler reported a fatal failure.
    #[error("effect handler failed: {0}")]
    Handler(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RulesError>;
