//! Card catalog: validated definitions and the single instantiation path.
//!
//! Definitions are validated once, at registration - a malformed catalog
//! entry fails fast instead of being patched at each call site. Every
//! `Card` in play is minted by `instantiate`, which allocates a fresh
//! `InstanceId` per copy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::core::{InstanceId, Result, RulesError};

use super::card::{Card, CardKind, Color, SplashBonus};

/// Static card definition - the shared data behind every copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, unique within a catalog.
    pub name: String,
    /// Mana cost.
    pub cost: i64,
    /// Creature or spell.
    pub kind: CardKind,
    /// Attack value (creatures only).
    pub attack: i64,
    /// Starting health (creatures only).
    pub health: i64,
    /// Ability identifier, if any.
    pub ability: Option<AbilityId>,
    /// Card color.
    pub color: Color,
    /// Whether copies can receive a splash bonus.
    pub splash_friendly: bool,
    /// The bonus deferred when a copy is splash-eligible.
    pub splash_bonus: Option<SplashBonus>,
}

impl CardDefinition {
    /// Define a creature.
    #[must_use]
    pub fn creature(name: impl Into<String>, cost: i64, attack: i64, health: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Creature,
            attack,
            health,
            ability: None,
            color: Color::default(),
            splash_friendly: false,
            splash_bonus: None,
        }
    }

    /// Define a spell.
    #[must_use]
    pub fn spell(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Spell,
            attack: 0,
            health: 0,
            ability: None,
            color: Color::default(),
            splash_friendly: false,
            splash_bonus: None,
        }
    }

    /// Set the ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Set the color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Attach a splash bonus and mark the card splash-friendly
    /// (builder pattern).
    #[must_use]
    pub fn with_splash_bonus(mut self, bonus: SplashBonus) -> Self {
        self.splash_friendly = true;
        self.splash_bonus = Some(bonus);
        self
    }

    /// Validate the definition. Called once at registration.
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RulesError::MalformedCard("empty name".to_string()));
        }
        if self.cost < 0 {
            return Err(RulesError::MalformedCard(format!(
                "{}: negative cost",
                self.name
            )));
        }
        match self.kind {
            CardKind::Creature => {
                if self.health < 1 {
                    return Err(RulesError::MalformedCard(format!(
                        "{}: creature must start with at least 1 health",
                        self.name
                    )));
                }
                if self.attack < 0 {
                    return Err(RulesError::MalformedCard(format!(
                        "{}: negative attack",
                        self.name
                    )));
                }
            }
            CardKind::Spell => {
                if self.attack != 0 || self.health != 0 {
                    return Err(RulesError::MalformedCard(format!(
                        "{}: spells carry no combat stats",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Catalog of card definitions, keyed by name.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{CardCatalog, CardDefinition};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::creature("River Crab", 2, 2, 3)).unwrap();
///
/// let a = catalog.instantiate("River Crab").unwrap();
/// let b = catalog.instantiate("River Crab").unwrap();
///
/// // Same definition, distinct identities.
/// assert_eq!(a.name, b.name);
/// assert_ne!(a.instance_id, b.instance_id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    by_name: FxHashMap<String, CardDefinition>,
    next_instance: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, validating it once.
    ///
    /// Returns `MalformedCard` for invalid entries and
    /// `DuplicateDefinition` when the name is taken.
    pub fn register(&mut self, def: CardDefinition) -> Result<()> {
        def.validate()?;
        if self.by_name.contains_key(&def.name) {
            return Err(RulesError::DuplicateDefinition(def.name));
        }
        self.by_name.insert(def.name.clone(), def);
        Ok(())
    }

    /// Look up a definition by name.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name)
    }

    /// Mint a new copy of a registered definition.
    ///
    /// Allocates a fresh `InstanceId`; IDs are never reused.
    pub fn instantiate(&mut self, name: &str) -> Result<Card> {
        let def = self
            .by_name
            .get(name)
            .ok_or_else(|| RulesError::UnknownCard(name.to_string()))?;

        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;

        Ok(Card::from_definition(id, def))
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.by_name.values()
    }
}
