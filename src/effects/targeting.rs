//! Target legality rules.
//!
//! `validate_target` is a pure decision function, invoked strictly
//! before any mutation of a play action. The rule chain runs in fixed
//! priority and the first violation wins, so a target breaking several
//! rules always reports the same reason.
//!
//! Rule chain:
//! 1. Spell Shield - spells cannot target a shielded creature.
//! 2. Taunt - attacks must go at the defending side's Taunt creatures
//!    while any remain (player targets included).
//! 3. Elusive - attacks cannot target an Elusive creature.
//!
//! Player targets bypass the creature-only rules 1 and 3.
//!
//! Capability sets are resolved from the live target at check time;
//! nothing here reads a copy captured before resolution began.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityRegistry;
use crate::cards::{Card, CardKind};
use crate::core::{IllegalTarget, InstanceId, Side};
use crate::field::FieldManager;

/// A chosen target for a play action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// A creature on the battlefield, by instance identity.
    Creature(InstanceId),
    /// A player, by side.
    Player(Side),
}

/// Decide whether `target` is legal for a play by `source`.
///
/// A `Creature` source stands for an attack action; a `Spell` source for
/// a spell being cast. The function is advisory and stateless: blocking
/// a spell does not consume the shield here - that is the resolver's
/// job.
///
/// A creature target that is no longer on the battlefield trips no rule;
/// the resolver reports that case as `CreatureNotFound` before invoking
/// the chain.
pub fn validate_target(
    source: &Card,
    target: Target,
    acting_side: Side,
    field: &FieldManager,
    abilities: &AbilityRegistry,
) -> std::result::Result<(), IllegalTarget> {
    let defending = acting_side.opposite();

    // Rule 1: Spell Shield.
    if source.kind == CardKind::Spell {
        if let Target::Creature(id) = target {
            if let Some(card) = field.creature(id) {
                if card.capabilities(abilities).grants_spell_shield() {
                    return Err(IllegalTarget::SpellShieldBlocked);
                }
            }
        }
    }

    if source.kind == CardKind::Creature {
        // Rule 2: Taunt. Membership in the defending Taunt set, by
        // instance identity.
        let taunts: Vec<InstanceId> = field
            .field(defending)
            .iter()
            .filter(|c| c.capabilities(abilities).grants_taunt())
            .map(|c| c.instance_id)
            .collect();
        if !taunts.is_empty() {
            let targets_taunt =
                matches!(target, Target::Creature(id) if taunts.contains(&id));
            if !targets_taunt {
                return Err(IllegalTarget::TauntMustBeAttackedFirst);
            }
        }

        // Rule 3: Elusive.
        if let Target::Creature(id) = target {
            if let Some(card) = field.creature(id) {
                if card.capabilities(abilities).grants_elusive() {
                    return Err(IllegalTarget::ElusiveCannotBeAttacked);
                }
            }
        }
    }

    Ok(())
}

/// All targets `source` could legally choose right now.
///
/// Candidates are the defending player and creatures for attacks, and
/// every player and creature for spells; each is filtered through
/// `validate_target`. Broader game rules (mana, attack exhaustion) live
/// with the caller.
pub fn legal_targets(
    source: &Card,
    acting_side: Side,
    field: &FieldManager,
    abilities: &AbilityRegistry,
) -> Vec<Target> {
    let defending = acting_side.opposite();

    let mut candidates: Vec<Target> = Vec::new();
    match source.kind {
        CardKind::Creature => {
            candidates.push(Target::Player(defending));
            candidates.extend(
                field
                    .field(defending)
                    .iter()
                    .map(|c| Target::Creature(c.instance_id)),
            );
        }
        CardKind::Spell => {
            candidates.push(Target::Player(acting_side));
            candidates.push(Target::Player(defending));
            candidates.extend(
                field
                    .all_creatures()
                    .iter()
                    .map(|c| Target::Creature(c.instance_id)),
            );
        }
    }

    candidates
        .into_iter()
        .filter(|t| validate_target(source, *t, acting_side, field, abilities).is_ok())
        .collect()
}
