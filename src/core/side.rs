//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The game is strictly two-player and symmetric: every battlefield and
//! player concept exists once per side.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access. Supports indexing by `Side`
//! and iteration in resolution order (friendly first).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the table.
///
/// `Friendly` is the local player's side, `Opposing` the remote player's.
/// Resolution order is always friendly before opposing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The local player's side.
    Friendly,
    /// The remote player's side.
    Opposing,
}

impl Side {
    /// Get the other side.
    ///
    /// ```
    /// use duelcore::core::Side;
    ///
    /// assert_eq!(Side::Friendly.opposite(), Side::Opposing);
    /// assert_eq!(Side::Opposing.opposite(), Side::Friendly);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Friendly => Side::Opposing,
            Side::Opposing => Side::Friendly,
        }
    }

    /// Both sides, in resolution order (friendly first).
    #[must_use]
    pub const fn both() -> [Side; 2] {
        [Side::Friendly, Side::Opposing]
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Friendly => write!(f, "friendly side"),
            Side::Opposing => write!(f, "opposing side"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Holds exactly one `T` per side. Use indexing for access:
///
/// ```
/// use duelcore::core::{Side, SideMap};
///
/// let mut health: SideMap<i64> = SideMap::with_value(30);
///
/// health[Side::Opposing] -= 5;
/// assert_eq!(health[Side::Friendly], 30);
/// assert_eq!(health[Side::Opposing], 25);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    friendly: T,
    opposing: T,
}

impl<T> SideMap<T> {
    /// Create a new SideMap from the two entries.
    #[must_use]
    pub fn new(friendly: T, opposing: T) -> Self {
        Self { friendly, opposing }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            friendly: value.clone(),
            opposing: value,
        }
    }

    /// Create a new SideMap with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self {
            friendly: factory(Side::Friendly),
            opposing: factory(Side::Opposing),
        }
    }

    /// Get a reference to a side's entry.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Friendly => &self.friendly,
            Side::Opposing => &self.opposing,
        }
    }

    /// Get a mutable reference to a side's entry.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Friendly => &mut self.friendly,
            Side::Opposing => &mut self.opposing,
        }
    }

    /// Iterate over entries in resolution order (friendly first).
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().into_iter().map(move |s| (s, self.get(s)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}
