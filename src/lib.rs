//! An entity-component-system runtime.
//!
//! [Entities](entities::Entity) are plain ids, [components](components::Component) are stored in
//! packed per-type [pools](data_structures::Pool), and [systems](systems::System) keep a list of
//! the entities holding every component they require. All structural changes are applied at a
//! single sync point per frame, [Registry::update].

extern crate self as kestrel_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod error;
pub mod config;
pub mod game;
mod registry;

pub use registry::Registry;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::registry::Registry;
	pub use crate::config::RegistryConfig;
	pub use crate::error::{EcsError, Result};
	pub use crate::data_structures::{Pool, Signature, MAX_COMPONENTS};
	pub use crate::entities::{Entity, EntityStore};
}

#[cfg(test)]
mod tests;
