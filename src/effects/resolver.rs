//! Play resolution: primary effect, deferred bonus, reactive deaths.
//!
//! `EffectResolver` sequences one play action at a time:
//!
//! 1. Validate the chosen target against live state.
//! 2. Capture splash-bonus eligibility against pre-action state and
//!    record it in the single deferred slot.
//! 3. Run the external primary handler (the card's main effect).
//! 4. Apply the deferred bonus exactly once, through an external hook.
//! 5. Clear the slot unconditionally - success or error.
//! 6. Sweep reactive deaths from live field queries, friendly side
//!    first, insertion order within a side.
//!
//! The resolver is non-reentrant: the caller serializes actions, one at
//! a time. The single slot plus clear-on-exit is what keeps a leftover
//! record from ever leaking into the next action.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityRegistry;
use crate::cards::{Card, SplashBonus};
use crate::core::{GameContext, IllegalTarget, InstanceId, Result, RulesError, Side};
use crate::field::FieldManager;

use super::targeting::{validate_target, Target};

/// The single outstanding deferred bonus.
///
/// Keyed to the exact card instance whose play recorded it, so a bonus
/// can never be applied on behalf of a different card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredBonus {
    /// The card instance the bonus belongs to.
    pub instance: InstanceId,
    /// The bonus to apply after the primary effect.
    pub bonus: SplashBonus,
}

/// External hooks invoked during resolution.
///
/// The core decides *when* a bonus applies or a death fires; the
/// surrounding effect layer decides *what* that means.
pub struct ResolverHooks<'a> {
    /// Apply a deferred bonus for a card played from `side`.
    pub apply_bonus: Box<dyn Fn(&Card, Side, &mut GameContext) + 'a>,
    /// React to a creature leaving the battlefield at zero health.
    pub on_death: Box<dyn Fn(&Card, Side, &mut GameContext) + 'a>,
}

impl<'a> ResolverHooks<'a> {
    /// Hooks that do nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            apply_bonus: Box::new(|_, _, _| {}),
            on_death: Box::new(|_, _, _| {}),
        }
    }

    /// Set the bonus-application hook (builder pattern).
    #[must_use]
    pub fn with_apply_bonus(mut self, hook: impl Fn(&Card, Side, &mut GameContext) + 'a) -> Self {
        self.apply_bonus = Box::new(hook);
        self
    }

    /// Set the death hook (builder pattern).
    #[must_use]
    pub fn with_on_death(mut self, hook: impl Fn(&Card, Side, &mut GameContext) + 'a) -> Self {
        self.on_death = Box::new(hook);
        self
    }
}

impl Default for ResolverHooks<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequencer for play actions.
pub struct EffectResolver {
    abilities: AbilityRegistry,
    deferred: Option<DeferredBonus>,
}

impl EffectResolver {
    /// Create a resolver over an ability registry.
    #[must_use]
    pub fn new(abilities: AbilityRegistry) -> Self {
        Self {
            abilities,
            deferred: None,
        }
    }

    /// The registry legality checks resolve capabilities through.
    #[must_use]
    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    /// The outstanding deferred bonus, if a play is mid-resolution.
    #[must_use]
    pub fn deferred(&self) -> Option<&DeferredBonus> {
        self.deferred.as_ref()
    }

    /// Check a target against live state.
    ///
    /// A creature target missing from the battlefield is
    /// `CreatureNotFound`; otherwise the targeting rule chain decides.
    /// Primary handlers use this for any mid-effect checks they need.
    pub fn check_target(
        &self,
        source: &Card,
        target: Target,
        acting_side: Side,
        field: &FieldManager,
    ) -> Result<()> {
        if let Target::Creature(id) = target {
            if field.creature(id).is_none() {
                return Err(RulesError::CreatureNotFound(id));
            }
        }
        validate_target(source, target, acting_side, field, &self.abilities)?;
        Ok(())
    }

    /// Resolve one play action end to end.
    ///
    /// On an illegal target the action aborts before any mutation, with
    /// one exception: a spell blocked by Spell Shield consumes
    /// the shield. A handler error propagates, but the deferred slot is
    /// cleared on every exit path, so a later play can never observe a
    /// leftover record.
    pub fn resolve_play<F>(
        &mut self,
        card: &Card,
        target: Option<Target>,
        side: Side,
        primary: F,
        ctx: &mut GameContext,
        hooks: &ResolverHooks<'_>,
    ) -> Result<()>
    where
        F: FnOnce(&Card, &mut GameContext) -> Result<()>,
    {
        // Legality is fully decided before the first mutating call.
        if let Some(target) = target {
            if let Err(err) = self.check_target(card, target, side, &ctx.field) {
                if err == RulesError::IllegalTarget(IllegalTarget::SpellShieldBlocked) {
                    self.consume_spell_shield(target, ctx);
                }
                ctx.add_log(format!("{} rejected: {}", card.name, err));
                return Err(err);
            }
        }

        // Eligibility is captured against pre-primary state.
        if self.splash_eligible(card, side, &ctx.field) {
            if let Some(bonus) = &card.splash_bonus {
                self.deferred = Some(DeferredBonus {
                    instance: card.instance_id,
                    bonus: bonus.clone(),
                });
            }
        }

        let outcome = primary(card, ctx);

        if outcome.is_ok() {
            if let Some(slot) = &self.deferred {
                if slot.instance == card.instance_id {
                    ctx.add_log(format!("{} gains its splash bonus", card.name));
                    (hooks.apply_bonus)(card, side, ctx);
                }
            }
        }

        // Unconditional: the slot never survives this call.
        self.deferred = None;

        outcome?;

        self.sweep_deaths(ctx, hooks);
        Ok(())
    }

    /// Splash eligibility: the card declares a bonus and another
    /// friendly creature of its color is already on the battlefield.
    fn splash_eligible(&self, card: &Card, side: Side, field: &FieldManager) -> bool {
        card.splash_friendly
            && card.splash_bonus.is_some()
            && field
                .field(side)
                .iter()
                .any(|c| c.instance_id != card.instance_id && c.color == card.color)
    }

    /// Spend the target's Spell Shield after it blocked a spell.
    fn consume_spell_shield(&self, target: Target, ctx: &mut GameContext) {
        if let Target::Creature(id) = target {
            let name = match ctx.field.creature_mut(id) {
                Some(card) => {
                    card.spell_shield_spent = true;
                    card.name.clone()
                }
                None => return,
            };
            ctx.add_log(format!("{}'s Spell Shield absorbs the spell", name));
        }
    }

    /// Remove creatures at zero health and fire their death hooks.
    ///
    /// Each pass re-queries the live field: a death hook may itself kill
    /// or summon creatures, and the sweep must see that, not a list from
    /// before the primary handler ran.
    fn sweep_deaths(&self, ctx: &mut GameContext, hooks: &ResolverHooks<'_>) {
        loop {
            let mut corpse = None;
            'scan: for side in Side::both() {
                for card in ctx.field.field(side).iter() {
                    if card.is_dead() {
                        corpse = Some((side, card.instance_id));
                        break 'scan;
                    }
                }
            }

            let Some((side, id)) = corpse else { break };

            // The id came from a live query, so removal cannot miss.
            if let Ok(card) = ctx.field.remove_creature(side, id) {
                ctx.add_log(format!("{} is destroyed", card.name));
                (hooks.on_death)(&card, side, ctx);
            }
        }
    }
}
