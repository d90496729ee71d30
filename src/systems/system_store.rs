use crate::data_structures::Signature;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::systems::{EntityIdSet, System};
use crate::entities::Entity;
use std::any::TypeId;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Owns every [System] registered with a [Registry](crate::Registry).
#[derive(Default)]
pub struct SystemStore {
	index: HashMap<TypeId, usize, Hasher>,
	systems: Vec<Box<dyn System>>,
	unsynced: Vec<TypeId>,
}

impl SystemStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// # Panics
	/// If a system of the same type was already added.
	pub fn add_system<T: System>(&mut self, system: T) {
		let key = TypeId::of::<T>();
		assert!(!self.index.contains_key(&key), "System was already added to the current registry");

		tracing::debug!(system = system.name(), "adding system");
		self.index.insert(key, self.systems.len());
		self.systems.push(Box::new(system));
		self.unsynced.push(key);
	}

	pub fn remove_system<T: System>(&mut self) -> Option<T> {
		let position = self.index.remove(&TypeId::of::<T>())?;
		let system = self.systems.remove(position);
		tracing::debug!(system = system.as_ref().name(), "removing system");

		for index in self.index.values_mut() {
			if *index > position {
				*index -= 1;
			}
		}
		self.unsynced.retain(|key| *key != TypeId::of::<T>());

		system.into_any().downcast::<T>().ok().map(|system| *system)
	}

	pub fn has_system<T: System>(&self) -> bool {
		self.index.contains_key(&TypeId::of::<T>())
	}

	pub fn get<T: System>(&self) -> Option<&T> {
		let position = *self.index.get(&TypeId::of::<T>())?;
		let system: &dyn System = self.systems[position].as_ref();
		system.as_any().downcast_ref::<T>()
	}

	pub fn get_mut<T: System>(&mut self) -> Option<&mut T> {
		let position = *self.index.get(&TypeId::of::<T>())?;
		let system: &mut dyn System = self.systems[position].as_mut();
		system.as_any_mut().downcast_mut::<T>()
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}

	pub fn is_empty(&self) -> bool {
		self.systems.is_empty()
	}

	/// Iterate over every system, in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &(dyn System + 'static)> + '_ {
		self.systems.iter().map(|system| system.as_ref())
	}

	/// Add `entity` to every system whose requirements `signature` satisfies.
	pub(crate) fn add_entity(&mut self, entity: Entity, signature: &Signature) {
		for system in self.systems.iter_mut() {
			let base = system.base_mut();
			if base.matches(signature) {
				tracing::trace!(entity = entity.id(), "entity matched system");
				base.add_entity(entity);
			}
		}
	}

	/// Bring the membership of each changed entity in line with its current signature.
	pub(crate) fn refresh_entities(&mut self, changed: &[(Entity, Signature)]) {
		let mut leaving = EntityIdSet::default();
		for system in self.systems.iter_mut() {
			let base = system.base_mut();
			for (entity, signature) in changed {
				match (base.matches(signature), base.contains(*entity)) {
					(true, false) => base.add_entity(*entity),
					(false, true) => {
						leaving.insert(entity.id());
					},
					_ => {},
				}
			}

			if !leaving.is_empty() {
				base.remove_entities(&leaving);
				leaving.clear();
			}
		}
	}

	/// Remove the entities whose ids are in `killed` from every system.
	pub(crate) fn remove_entities(&mut self, killed: &EntityIdSet) {
		if killed.is_empty() {
			return;
		}

		for system in self.systems.iter_mut() {
			system.base_mut().remove_entities(killed);
		}
	}

	pub(crate) fn clear_entities(&mut self) {
		for system in self.systems.iter_mut() {
			system.base_mut().clear();
		}
	}

	/// Fill systems added since the last sync with every entity they match.
	pub(crate) fn sync_new_systems<'l>(&mut self, entities: impl Iterator<Item = (Entity, &'l Signature)> + Clone) {
		for key in self.unsynced.drain(..) {
			let Some(position) = self.index.get(&key) else {
				continue;
			};

			let base = self.systems[*position].base_mut();
			for (entity, signature) in entities.clone() {
				if base.matches(signature) {
					base.add_entity(entity);
				}
			}
		}
	}
}
