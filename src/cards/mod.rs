//! Card system: instances, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: A specific copy in play, carrying its `InstanceId`
//! - `CardKind`: Creature or spell
//! - `SplashBonus`: Descriptor for a deferred bonus
//! - `CardDefinition`: Static card data, validated at registration
//! - `CardCatalog`: Name lookup and the sole instantiation path
//!
//! ## Instance Identity
//!
//! Copies are minted exclusively by `CardCatalog::instantiate`, each with
//! a fresh `InstanceId`. Battlefield mutation keys on that identity, so
//! two copies of one definition never alias.

pub mod card;
pub mod catalog;

pub use card::{Card, CardKind, Color, SplashBonus};
pub use catalog::{CardCatalog, CardDefinition};
