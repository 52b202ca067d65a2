//! Card instances - the identity-bearing records that enter play.
//!
//! A `Card` is one specific copy in a game. Two copies with the same
//! name are distinct entities; battlefield operations key on
//! `instance_id`, never on name equality.
//!
//! Cards are only minted through the catalog (`CardCatalog::instantiate`),
//! which validates the definition once. There is no secondary
//! construction path to patch up later.

use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityId, AbilityRegistry, Capability, CapabilitySet};
use crate::core::InstanceId;

use super::catalog::CardDefinition;

/// The two kinds of playable card.
///
/// When presented to the target validator, a `Creature` source stands
/// for an attack action and a `Spell` source for a spell being cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A creature that enters the battlefield.
    Creature,
    /// A one-shot spell.
    Spell,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Creature => write!(f, "creature"),
            CardKind::Spell => write!(f, "spell"),
        }
    }
}

/// Card color. Splash bonuses key on shared color between cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    #[default]
    Neutral,
}

/// Descriptor for a deferred ("splash") bonus.
///
/// The core records and sequences the bonus; applying it is the job of
/// an external hook, so the descriptor is plain data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashBonus {
    /// Grant the played creature extra stats.
    BuffStats { attack: i64, health: i64 },
    /// Deal damage to the opposing player.
    DealDamage { amount: i64 },
    /// Draw cards.
    DrawCards { count: usize },
}

/// A specific card copy in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this copy.
    pub instance_id: InstanceId,

    /// Card name (shared by all copies of the definition).
    pub name: String,

    /// Mana cost.
    pub cost: i64,

    /// Creature or spell.
    pub kind: CardKind,

    /// Attack value (0 for spells).
    pub attack: i64,

    /// Current health (0 for spells).
    pub health: i64,

    /// Ability identifier, if the card has one.
    pub ability: Option<AbilityId>,

    /// Card color.
    pub color: Color,

    /// Whether this card can receive a splash bonus.
    pub splash_friendly: bool,

    /// The bonus to defer when splash-eligible.
    pub splash_bonus: Option<SplashBonus>,

    /// Set once this card's Spell Shield has blocked a spell.
    /// Masks `SpellShield` out of the resolved capability set.
    pub spell_shield_spent: bool,
}

impl Card {
    /// Mint a card from a validated definition.
    ///
    /// Crate-private: the catalog's `instantiate` is the only
    /// construction path.
    pub(crate) fn from_definition(instance_id: InstanceId, def: &CardDefinition) -> Self {
        Self {
            instance_id,
            name: def.name.clone(),
            cost: def.cost,
            kind: def.kind,
            attack: def.attack,
            health: def.health,
            ability: def.ability.clone(),
            color: def.color,
            splash_friendly: def.splash_friendly,
            splash_bonus: def.splash_bonus.clone(),
            spell_shield_spent: false,
        }
    }

    /// The live capability set of this card.
    ///
    /// Resolved through the registry on every call so rules always see
    /// current state; a spent Spell Shield no longer appears.
    #[must_use]
    pub fn capabilities(&self, abilities: &AbilityRegistry) -> CapabilitySet {
        let mut caps = match &self.ability {
            Some(id) => abilities.resolve(id),
            None => CapabilitySet::new(),
        };
        if self.spell_shield_spent {
            caps.retain(|c| *c != Capability::SpellShield);
        }
        caps
    }

    /// Has this creature's health reached zero?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.kind == CardKind::Creature && self.health <= 0
    }

    /// Apply damage to this creature.
    pub fn take_damage(&mut self, amount: i64) {
        self.health -= amount;
    }

    /// Permanently raise this creature's stats.
    pub fn buff(&mut self, attack: i64, health: i64) {
        self.attack += attack;
        self.health += health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;

    fn minted(def: CardDefinition) -> Card {
        let mut catalog = CardCatalog::new();
        let name = def.name.clone();
        catalog.register(def).unwrap();
        catalog.instantiate(&name).unwrap()
    }

    #[test]
    fn test_capabilities_resolve_live() {
        let registry = AbilityRegistry::standard();
        let card = minted(
            CardDefinition::creature("Wall", 2, 0, 4).with_ability(AbilityId::new("taunt")),
        );

        assert!(card.capabilities(&registry).grants_taunt());
    }

    #[test]
    fn test_no_ability_is_empty_set() {
        let registry = AbilityRegistry::standard();
        let card = minted(CardDefinition::creature("Vanilla", 1, 1, 1));

        assert!(card.capabilities(&registry).is_empty());
    }

    #[test]
    fn test_spent_shield_is_masked() {
        let registry = AbilityRegistry::standard();
        let mut card = minted(
            CardDefinition::creature("Warded", 3, 2, 3)
                .with_ability(AbilityId::new("spell_shield")),
        );

        assert!(card.capabilities(&registry).grants_spell_shield());

        card.spell_shield_spent = true;
        assert!(!card.capabilities(&registry).grants_spell_shield());
    }

    #[test]
    fn test_damage_and_death() {
        let mut card = minted(CardDefinition::creature("Grunt", 1, 2, 3));

        card.take_damage(2);
        assert_eq!(card.health, 1);
        assert!(!card.is_dead());

        card.take_damage(5);
        assert!(card.is_dead());
    }

    #[test]
    fn test_buff() {
        let mut card = minted(CardDefinition::creature("Grunt", 1, 2, 3));
        card.buff(1, 2);
        assert_eq!(card.attack, 3);
        assert_eq!(card.health, 5);
    }

    #[test]
    fn test_spells_never_dead() {
        let card = minted(CardDefinition::spell("Zap", 1));
        assert!(!card.is_dead());
    }

    #[test]
    fn test_serialization() {
        let card = minted(
            CardDefinition::creature("Warded", 3, 2, 3)
                .with_ability(AbilityId::new("spell_shield"))
                .with_color(Color::Blue)
                .with_splash_bonus(SplashBonus::BuffStats { attack: 1, health: 1 }),
        );

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
