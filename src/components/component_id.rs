//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId) being stable between program re-runs,
//! unless every component type is registered up front, in a fixed order, through
//! [ComponentRegistry::register].
//! [Component ids](ComponentId) are used for populating the [signatures](Signature)
//! that decide which [systems](crate::systems::System) see which entities.

use crate::data_structures::{Signature, MAX_COMPONENTS};
use crate::error::{EcsError, Result};
use crate::components::Component;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::any::TypeId;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

lazy_static! {
	static ref COMPONENT_TABLE: RwLock<ComponentTable> = RwLock::new(ComponentTable::default());
}

#[derive(Default)]
struct ComponentTable {
	ids: HashMap<TypeId, ComponentId, Hasher>,
	names: Vec<&'static str>,
}

/// A process-wide identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`, registering it on first use.
	///
	/// # Panics
	/// If `T` is new and [MAX_COMPONENTS] component types have already been registered.
	/// Running out of component ids is a configuration error the program cannot recover from.
	#[inline]
	pub fn of<T: Component>() -> ComponentId {
		match Self::try_of::<T>() {
			Ok(id) => id,
			Err(err) => panic!("{err}"),
		}
	}

	/// Get the [ComponentId] of the type `T`, registering it on first use.
	pub fn try_of<T: Component>() -> Result<ComponentId> {
		ComponentRegistry::register::<T>()
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}

impl From<&[ComponentId]> for Signature {
	fn from(ids: &[ComponentId]) -> Self {
		ids.iter().map(ComponentId::value).collect()
	}
}

/// The process-wide table assigning [component ids](ComponentId) to component types.
///
/// Ids are handed out in registration order, starting at 0, and are never reused.
pub struct ComponentRegistry;

impl ComponentRegistry {
	/// Register `T`, returning its id. Registering the same type again returns the same id.
	pub fn register<T: Component>() -> Result<ComponentId> {
		let key = TypeId::of::<T>();
		if let Some(id) = COMPONENT_TABLE.read().ids.get(&key) {
			return Ok(*id);
		}

		let mut table = COMPONENT_TABLE.write();
		if let Some(id) = table.ids.get(&key) {
			return Ok(*id);
		}

		let value = table.names.len();
		if value >= MAX_COMPONENTS {
			return Err(EcsError::ComponentLimitExceeded {
				limit: MAX_COMPONENTS,
				type_name: T::name(),
			});
		}

		let id = ComponentId { value };
		table.ids.insert(key, id);
		table.names.push(T::name());
		tracing::debug!(component = T::name(), id = value, "registered component type");
		Ok(id)
	}

	/// The id of `T`, if it has already been registered.
	pub fn lookup<T: Component>() -> Option<ComponentId> {
		COMPONENT_TABLE.read().ids.get(&TypeId::of::<T>()).copied()
	}

	/// The name of the component type registered under `id`.
	pub fn name_of(id: ComponentId) -> Option<&'static str> {
		COMPONENT_TABLE.read().names.get(id.value()).copied()
	}

	/// Number of component types registered so far.
	pub fn len() -> usize {
		COMPONENT_TABLE.read().names.len()
	}

	pub fn is_empty() -> bool {
		Self::len() == 0
	}
}
