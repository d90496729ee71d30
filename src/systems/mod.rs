//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be manually added to a [Registry](crate::Registry)
//! for it to start tracking matching entities.

mod system;
mod system_store;

pub use system::*;
pub(crate) use system::EntityIdSet;
pub use system_store::*;
