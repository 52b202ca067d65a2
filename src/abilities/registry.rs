//! Ability registry: identifier to capability set and display text.
//!
//! The registry is loaded once from static data and treated as immutable
//! for the process lifetime. Unknown identifiers resolve to the empty
//! capability set - absence of an ability is a defensive default, not an
//! error condition.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::capability::{Capability, CapabilitySet};

/// Identifier for an ability, the key a card carries into the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityId(pub String);

impl AbilityId {
    /// Create a new ability ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AbilityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an ability identifier resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDef {
    /// The structured capabilities the ability grants.
    pub capabilities: CapabilitySet,
    /// Human-readable display text.
    pub description: String,
}

impl AbilityDef {
    /// Create a definition with display text and no capabilities yet.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            capabilities: CapabilitySet::new(),
            description: description.into(),
        }
    }

    /// Add a capability (builder pattern).
    #[must_use]
    pub fn with_capability(mut self, cap: Capability) -> Self {
        self.capabilities.insert(cap);
        self
    }
}

/// Registry of ability definitions.
///
/// ## Example
///
/// ```
/// use duelcore::abilities::{AbilityDef, AbilityId, AbilityRegistry, Capability};
///
/// let mut registry = AbilityRegistry::new();
/// registry.register(
///     AbilityId::new("taunt"),
///     AbilityDef::new("Taunt").with_capability(Capability::Taunt),
/// );
///
/// assert!(registry.resolve(&AbilityId::new("taunt")).grants_taunt());
/// assert!(registry.resolve(&AbilityId::new("unknown")).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    entries: FxHashMap<AbilityId, AbilityDef>,
}

impl AbilityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the standard keyword abilities.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            AbilityId::new("taunt"),
            AbilityDef::new("Taunt. Enemies must attack this creature first.")
                .with_capability(Capability::Taunt),
        );
        registry.register(
            AbilityId::new("spell_shield"),
            AbilityDef::new("Spell Shield. Blocks the first spell that targets this creature.")
                .with_capability(Capability::SpellShield),
        );
        registry.register(
            AbilityId::new("elusive"),
            AbilityDef::new("Elusive. Cannot be attacked.")
                .with_capability(Capability::Elusive),
        );
        registry.register(
            AbilityId::new("spell_damage_1"),
            AbilityDef::new("Your spells deal 1 more damage.")
                .with_capability(Capability::SpellDamage(1)),
        );
        registry
    }

    /// Register an ability definition.
    ///
    /// Panics if the identifier is already registered: the ability table
    /// is static data and a duplicate is a programming error.
    pub fn register(&mut self, id: AbilityId, def: AbilityDef) {
        if self.entries.contains_key(&id) {
            panic!("Ability {:?} already registered", id);
        }
        self.entries.insert(id, def);
    }

    /// Resolve an identifier to its capability set.
    ///
    /// Unknown identifiers yield the empty set.
    #[must_use]
    pub fn resolve(&self, id: &AbilityId) -> CapabilitySet {
        self.entries
            .get(id)
            .map(|def| def.capabilities.clone())
            .unwrap_or_default()
    }

    /// Display text for an identifier, or `""` when unknown.
    #[must_use]
    pub fn describe(&self, id: &AbilityId) -> &str {
        self.entries
            .get(id)
            .map(|def| def.description.as_str())
            .unwrap_or("")
    }

    /// Check if an identifier is registered.
    #[must_use]
    pub fn contains(&self, id: &AbilityId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&AbilityId, &AbilityDef)> {
        self.entries.iter()
    }
}
