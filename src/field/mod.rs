//! Battlefield system.
//!
//! The two lanes (friendly, opposing) hold up to seven creatures each in
//! insertion order. All structural mutation funnels through
//! `FieldManager`; reads are live, snapshots are explicit.

pub mod manager;

pub use manager::{FieldManager, FIELD_CAPACITY};
