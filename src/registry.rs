use crate::systems::{EntityIdSet, System, SystemStore};
use crate::entities::{EntityStore, PendingChanges};
use std::ops::{Deref, DerefMut};
use crate::config::RegistryConfig;

/// A container for [entities](crate::entities::Entity), their
/// [components](crate::components::Component), and the [systems](System) that process them.
///
/// Structural changes (creating and killing entities, adding and removing components)
/// are recorded immediately but only reach the systems' entity lists when
/// [update](Self::update) is called, once per frame. Systems can therefore iterate their
/// entities while game logic keeps changing the world.
///
/// [Registry] dereferences to its [EntityStore], which exposes the entity and component API.
pub struct Registry {
	entity_store: EntityStore,
	system_store: SystemStore,
}

impl Registry {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			entity_store: EntityStore::new(config),
			system_store: SystemStore::new(),
		}
	}

	/// Apply every pending structural change to the [systems](System).
	///
	/// In order: systems added since the last call receive every matching entity,
	/// new entities join the systems they match, entities whose components changed are
	/// re-matched, and killed entities are removed from all systems, pools, tags and groups
	/// before their ids become available again.
	pub fn update(&mut self) {
		let PendingChanges { added, changed, killed } = self.entity_store.take_pending();
		let span = tracing::debug_span!(
			"registry.update",
			added = added.len(),
			changed = changed.len(),
			killed = killed.len()
		);
		let _span_guard = span.enter();

		self.system_store.sync_new_systems(self.entity_store.live_entities());

		for entity in added {
			let signature = self.entity_store.entity_signature(entity);
			self.system_store.add_entity(entity, &signature);
		}

		let changed: Vec<_> = changed
			.into_iter()
			.map(|entity| (entity, self.entity_store.entity_signature(entity)))
			.collect();
		self.system_store.refresh_entities(&changed);

		let killed_ids: EntityIdSet = killed.iter().map(|entity| entity.id()).collect();
		self.system_store.remove_entities(&killed_ids);
		for entity in killed {
			self.entity_store.destroy_entity(entity);
		}
	}

	/// Add a new [system](System) to the [Registry].
	/// Entities already in the registry are matched against it at the next [update](Self::update).
	///
	/// # Panics
	/// If a system of the same type was already added.
	pub fn add_system<T: System>(&mut self, system: T) {
		self.system_store.add_system(system);
	}

	pub fn remove_system<T: System>(&mut self) -> Option<T> {
		self.system_store.remove_system::<T>()
	}

	pub fn has_system<T: System>(&self) -> bool {
		self.system_store.has_system::<T>()
	}

	pub fn get_system<T: System>(&self) -> Option<&T> {
		self.system_store.get::<T>()
	}

	pub fn get_system_mut<T: System>(&mut self) -> Option<&mut T> {
		self.system_store.get_mut::<T>()
	}

	/// Lend a [system](System) together with the [EntityStore], so the system can run over its
	/// entities. Returns [None] if no system of type `T` was added.
	pub fn with_system<T: System, R>(&mut self, func: impl FnOnce(&mut T, &mut EntityStore) -> R) -> Option<R> {
		let system = self.system_store.get_mut::<T>()?;
		Some(func(system, &mut self.entity_store))
	}

	pub fn systems(&self) -> &SystemStore {
		&self.system_store
	}

	/// Remove every entity and component, leaving the systems registered but empty.
	pub fn clear(&mut self) {
		self.entity_store.clear();
		self.system_store.clear_entities();
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for Registry {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entity_store
	}
}

impl DerefMut for Registry {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entity_store
	}
}
