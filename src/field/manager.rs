//! Field manager: sole owner of battlefield mutation.
//!
//! Every structural change to the two battlefield lanes goes through
//! `add_creature` / `remove_creature`, and every read returns live
//! state. The one deliberate exception is `all_creatures`, an explicit
//! snapshot for "which creatures existed when this effect started"
//! iteration - callers must still come back to `field` for mutation or
//! current legality, never mutate through the snapshot.
//!
//! Lanes are `im::Vector`s, so the snapshot is a cheap structural clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{InstanceId, Result, RulesError, Side, SideMap};

/// Maximum creatures per side.
pub const FIELD_CAPACITY: usize = 7;

/// Owner of the two battlefield lanes.
///
/// Order within a lane is insertion order and is semantically meaningful:
/// it defines deterministic trigger order for "all creatures" effects.
///
/// ## Usage
///
/// ```
/// use duelcore::cards::{CardCatalog, CardDefinition};
/// use duelcore::core::Side;
/// use duelcore::field::FieldManager;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::creature("Grunt", 1, 2, 1)).unwrap();
///
/// let mut field = FieldManager::new();
/// let grunt = catalog.instantiate("Grunt").unwrap();
/// let id = grunt.instance_id;
///
/// field.add_creature(Side::Friendly, grunt).unwrap();
/// assert_eq!(field.len(Side::Friendly), 1);
///
/// field.remove_creature(Side::Friendly, id).unwrap();
/// assert_eq!(field.len(Side::Friendly), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldManager {
    lanes: SideMap<Vector<Card>>,
}

impl FieldManager {
    /// Create a manager with two empty lanes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live view of one side's lane.
    ///
    /// Never cache this across a mutating call; re-query instead.
    #[must_use]
    pub fn field(&self, side: Side) -> &Vector<Card> {
        &self.lanes[side]
    }

    /// Add a creature to the end of a lane (preserves trigger order).
    ///
    /// Fails with `FieldFull` and no mutation when the lane holds
    /// `FIELD_CAPACITY` creatures.
    pub fn add_creature(&mut self, side: Side, card: Card) -> Result<()> {
        if self.lanes[side].len() >= FIELD_CAPACITY {
            return Err(RulesError::FieldFull);
        }
        self.lanes[side].push_back(card);
        Ok(())
    }

    /// Remove a creature by instance identity.
    ///
    /// Fails with `CreatureNotFound` and no mutation when absent.
    /// Relative order of the remaining creatures is preserved. The
    /// removed card is returned for reactive (on-death) handling.
    pub fn remove_creature(&mut self, side: Side, id: InstanceId) -> Result<Card> {
        let lane = &mut self.lanes[side];
        let index = lane
            .iter()
            .position(|c| c.instance_id == id)
            .ok_or(RulesError::CreatureNotFound(id))?;
        Ok(lane.remove(index))
    }

    /// Explicit snapshot of every creature, friendly lane then opposing.
    ///
    /// Taken at call time; later mutation does not affect it. Use it to
    /// iterate "creatures as of now", never to mutate.
    #[must_use]
    pub fn all_creatures(&self) -> Vector<Card> {
        let mut snapshot = self.lanes[Side::Friendly].clone();
        snapshot.append(self.lanes[Side::Opposing].clone());
        snapshot
    }

    /// First creature matching a predicate, over the live
    /// friendly-then-opposing concatenation.
    pub fn find_creature(&self, predicate: impl Fn(&Card) -> bool) -> Option<&Card> {
        Side::both()
            .into_iter()
            .flat_map(|s| self.lanes[s].iter())
            .find(|c| predicate(c))
    }

    /// First creature with this name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.find_creature(|c| c.name == name)
    }

    /// Live reference to a creature by instance identity.
    #[must_use]
    pub fn creature(&self, id: InstanceId) -> Option<&Card> {
        self.find_creature(|c| c.instance_id == id)
    }

    /// Mutable reference to a creature by instance identity.
    pub fn creature_mut(&mut self, id: InstanceId) -> Option<&mut Card> {
        let side = self.side_of(id)?;
        let lane = &mut self.lanes[side];
        let index = lane.iter().position(|c| c.instance_id == id)?;
        lane.get_mut(index)
    }

    /// Which side a creature is on, if any.
    #[must_use]
    pub fn side_of(&self, id: InstanceId) -> Option<Side> {
        Side::both()
            .into_iter()
            .find(|&s| self.lanes[s].iter().any(|c| c.instance_id == id))
    }

    /// Number of creatures on a side.
    #[must_use]
    pub fn len(&self, side: Side) -> usize {
        self.lanes[side].len()
    }

    /// Check if both lanes are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Side::both().into_iter().all(|s| self.lanes[s].is_empty())
    }

    /// Check if a side's lane is at capacity.
    #[must_use]
    pub fn is_full(&self, side: Side) -> bool {
        self.lanes[side].len() >= FIELD_CAPACITY
    }
}
