//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! Entities can additionally be found by a unique tag, or by the group they were put in.

mod entity_index;
mod entity_instance;
mod entity_store;

pub use entity_instance::*;
pub use entity_store::*;
