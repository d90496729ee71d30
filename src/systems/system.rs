use crate::components::{Component, ComponentId};
use crate::data_structures::Signature;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::entities::Entity;
use std::collections::HashSet;
use std::any::Any;

pub(crate) type EntityIdSet = HashSet<u32, BuildHasherDefault<NoHashHasher<u32>>>;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
///
/// A system embeds a [SystemBase] that records which components it requires and which
/// entities currently satisfy that requirement. Each concrete system adds its own `update`
/// method, taking whatever collaborators it needs.
pub trait System: AsAny {
	fn base(&self) -> &SystemBase;
	fn base_mut(&mut self) -> &mut SystemBase;

	/// Name used in logs.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Checked downcasting support for [systems](System) stored as trait objects.
pub trait AsAny: 'static {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
	fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: 'static> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn Any> {
		self
	}
}

/// The state shared by every [System]: its required [Signature]
/// and the entities that currently match it.
///
/// Entities are kept in the order they joined. A set of their ids backs membership tests,
/// and removals are applied in batches, so one sync point stays linear in the number of entities.
#[derive(Default, Debug)]
pub struct SystemBase {
	signature: Signature,
	entities: Vec<Entity>,
	members: EntityIdSet,
}

impl SystemBase {
	pub fn new() -> Self {
		Self::default()
	}

	/// Require entities to hold a `T` component.
	/// Should only be called while the system is being constructed.
	///
	/// # Panics
	/// If `T` cannot be given a [ComponentId].
	pub fn require_component<T: Component>(&mut self) {
		self.signature.set(ComponentId::of::<T>().value(), true);
	}

	/// Builder-style [require_component](Self::require_component).
	pub fn with_component<T: Component>(mut self) -> Self {
		self.require_component::<T>();
		self
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	/// The entities currently matching this system.
	/// Only changes when [Registry::update](crate::Registry::update) is called.
	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}

	/// Whether `entity` is one of this system's entities.
	/// Only meaningful for entities of the registry owning the system.
	pub fn contains(&self, entity: Entity) -> bool {
		self.members.contains(&entity.id())
	}

	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	/// Whether an entity with the given signature should be tracked by this system.
	pub fn matches(&self, signature: &Signature) -> bool {
		self.signature.is_subset_of(signature)
	}

	pub(crate) fn add_entity(&mut self, entity: Entity) {
		if self.members.insert(entity.id()) {
			self.entities.push(entity);
		}
	}

	/// Drop every entity whose id is in `ids`, keeping the others in order.
	pub(crate) fn remove_entities(&mut self, ids: &EntityIdSet) {
		let mut removed = 0;
		for id in ids {
			if self.members.remove(id) {
				removed += 1;
			}
		}

		if removed > 0 {
			self.entities.retain(|entity| !ids.contains(&entity.id()));
		}
	}

	pub(crate) fn clear(&mut self) {
		self.entities.clear();
		self.members.clear();
	}
}
