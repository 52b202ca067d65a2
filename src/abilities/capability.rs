//! Capability sets resolved from ability identifiers.
//!
//! Legality rules never inspect ability display text; they consult the
//! structured capability set an ability ID resolves to. Capabilities are
//! either plain keywords (Taunt, Spell Shield, Elusive) or parametrized
//! (spell damage).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A named behavioral rule attached to a card via its ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// Enemies must attack this creature before any other target.
    Taunt,
    /// Blocks the first spell that targets this creature.
    SpellShield,
    /// Cannot be chosen as an attack target.
    Elusive,
    /// Bonus damage added to the controller's spells.
    SpellDamage(i64),
}

/// A set of capabilities, deduplicated on insert.
///
/// Almost every ability grants one or two capabilities, so the set is
/// backed by an inline small-vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    caps: SmallVec<[Capability; 4]>,
}

impl CapabilitySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability. Exact duplicates are ignored.
    pub fn insert(&mut self, cap: Capability) {
        if !self.caps.contains(&cap) {
            self.caps.push(cap);
        }
    }

    /// Add a capability (builder pattern).
    #[must_use]
    pub fn with(mut self, cap: Capability) -> Self {
        self.insert(cap);
        self
    }

    /// Check for an exact capability.
    #[must_use]
    pub fn contains(&self, cap: &Capability) -> bool {
        self.caps.contains(cap)
    }

    /// Does this set grant Taunt?
    #[must_use]
    pub fn grants_taunt(&self) -> bool {
        self.contains(&Capability::Taunt)
    }

    /// Does this set grant Spell Shield?
    #[must_use]
    pub fn grants_spell_shield(&self) -> bool {
        self.contains(&Capability::SpellShield)
    }

    /// Does this set grant Elusive?
    #[must_use]
    pub fn grants_elusive(&self) -> bool {
        self.contains(&Capability::Elusive)
    }

    /// Total spell damage granted by this set.
    #[must_use]
    pub fn spell_damage(&self) -> i64 {
        self.caps
            .iter()
            .map(|c| match c {
                Capability::SpellDamage(n) => *n,
                _ => 0,
            })
            .sum()
    }

    /// Remove every capability matching a predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&Capability) -> bool) {
        self.caps.retain(|c| keep(c));
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }

    /// Number of capabilities in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.caps.len()
    }

    /// Iterate over the capabilities.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.caps.iter()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::new();
        for cap in iter {
            set.insert(cap);
        }
        set
    }
}
