use crate::entities::entity_index::{GroupIndex, TagIndex};
use crate::data_structures::{ErasedPool, Pool, Signature};
use crate::components::{Component, ComponentId, ComponentRegistry};
use std::collections::{BTreeSet, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use crate::error::{EcsError, Result};
use crate::config::RegistryConfig;
use crate::entities::Entity;
use std::mem;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Structural changes collected since the last sync point.
#[derive(Default, Debug)]
pub(crate) struct PendingChanges {
	pub added: Vec<Entity>,
	pub changed: Vec<Entity>,
	pub killed: Vec<Entity>,
}

/// A container for [Entities](crate::entities::Entity) and their associated [Components](crate::components::Component).
///
/// Entity creation, destruction and component changes take effect in the store immediately,
/// but [systems](crate::systems::System) only observe them once
/// [Registry::update](crate::Registry::update) is called.
pub struct EntityStore {
	id: u32,
	config: RegistryConfig,

	num_entities: u32,
	free_ids: VecDeque<u32>,
	signatures: Vec<Signature>,
	alive: Vec<bool>,
	pools: Vec<Option<Box<dyn ErasedPool>>>,

	pending_add: BTreeSet<Entity>,
	pending_kill: BTreeSet<Entity>,
	changed: BTreeSet<Entity>,

	tags: TagIndex,
	groups: GroupIndex,
}

impl EntityStore {
	pub(crate) fn new(config: RegistryConfig) -> Self {
		Self {
			id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
			config,

			num_entities: 0,
			free_ids: VecDeque::new(),
			signatures: Vec::with_capacity(config.entity_capacity),
			alive: Vec::with_capacity(config.entity_capacity),
			pools: Vec::new(),

			pending_add: BTreeSet::new(),
			pending_kill: BTreeSet::new(),
			changed: BTreeSet::new(),

			tags: TagIndex::default(),
			groups: GroupIndex::default(),
		}
	}

	/// Identifier of the registry owning this store.
	pub fn registry_id(&self) -> u32 {
		self.id
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	///
	/// Ids released by destroyed entities are reused, oldest first.
	/// The entity can be given components right away, but
	/// [systems](crate::systems::System) will only see it after the next sync point.
	pub fn create_entity(&mut self) -> Entity {
		let id = match self.free_ids.pop_front() {
			Some(id) => id,
			None => {
				let id = self.num_entities;
				self.num_entities += 1;
				id
			},
		};

		let index = id as usize;
		if index >= self.signatures.len() {
			self.signatures.resize(index + 1, Signature::new());
			self.alive.resize(index + 1, false);
		}
		self.alive[index] = true;

		let entity = Entity { id, registry: self.id };
		self.pending_add.insert(entity);
		tracing::debug!(entity = id, "created entity");
		entity
	}

	/// Schedules the [entity](Entity) for destruction at the next sync point.
	/// Until then, the entity and its [components](Component) remain fully usable.
	pub fn kill_entity(&mut self, entity: Entity) {
		self.assert_owned(entity);
		if self.is_alive(entity) && self.pending_kill.insert(entity) {
			tracing::debug!(entity = entity.id, "scheduled entity for destruction");
		}
	}

	/// Whether an entity with this handle's id currently exists in this store.
	/// A stale handle whose id was recycled reports the new entity as alive.
	pub fn is_alive(&self, entity: Entity) -> bool {
		entity.registry == self.id && self.alive.get(entity.id as usize).copied().unwrap_or(false)
	}

	/// Number of live entities, including the ones not yet visible to systems.
	pub fn entity_count(&self) -> usize {
		self.num_entities as usize - self.free_ids.len()
	}

	/// Iterate over every live entity, in id order.
	pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
		self.live_entities().map(|(entity, _)| entity)
	}

	/// Number of entities waiting to become visible to systems.
	pub fn pending_additions(&self) -> usize {
		self.pending_add.len()
	}

	/// Number of entities waiting to be destroyed.
	pub fn pending_kills(&self) -> usize {
		self.pending_kill.len()
	}

	/// The set of [components](Component) currently attached to `entity`.
	pub fn entity_signature(&self, entity: Entity) -> Signature {
		self.assert_owned(entity);
		self.signatures.get(entity.id as usize).copied().unwrap_or_default()
	}

	/// Attach `value` to the [entity](Entity), replacing any [component](Component) of the same type.
	///
	/// # Panics
	/// If the entity has already been destroyed, or `T` cannot be given a [ComponentId].
	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) {
		self.assert_alive(entity);
		let component = ComponentId::of::<T>();

		self.pool_entry::<T>(component).set(entity.id, value);
		self.signatures[entity.id as usize].set(component.value(), true);
		self.mark_changed(entity);

		tracing::trace!(entity = entity.id, component = T::name(), "added component");
	}

	/// Detach a [component](Component) from the [entity](Entity), returning it if it was present.
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
		self.assert_owned(entity);
		let component = ComponentRegistry::lookup::<T>()?;

		let signature = self.signatures.get_mut(entity.id as usize)?;
		signature.set(component.value(), false);

		let value = self.pool_mut::<T>()?.remove(entity.id);
		if value.is_some() {
			self.mark_changed(entity);
			tracing::trace!(entity = entity.id, component = T::name(), "removed component");
		}
		value
	}

	pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
		self.assert_owned(entity);
		match ComponentRegistry::lookup::<T>() {
			Some(component) => self.entity_signature(entity).get(component.value()),
			None => false,
		}
	}

	/// Get a reference to the [entity](Entity)'s `T` [component](Component).
	///
	/// Callers are expected to know the component is present, either by checking
	/// [has_component](Self::has_component) or because a system requires it.
	pub fn get_component<T: Component>(&self, entity: Entity) -> Result<&T> {
		self.assert_owned(entity);
		match self.pool::<T>() {
			Some(pool) => pool.get(entity.id),
			None => Err(missing::<T>(entity)),
		}
	}

	/// Get a mutable reference to the [entity](Entity)'s `T` [component](Component).
	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
		self.assert_owned(entity);
		match self.pool_mut::<T>() {
			Some(pool) => pool.get_mut(entity.id),
			None => Err(missing::<T>(entity)),
		}
	}

	/// The [Pool] storing every `T` [component](Component), if one was ever added.
	pub fn pool<T: Component>(&self) -> Option<&Pool<T>> {
		let component = ComponentRegistry::lookup::<T>()?;
		let pool: &dyn ErasedPool = self.pools.get(component.value())?.as_deref()?;
		pool.as_any().downcast_ref::<Pool<T>>()
	}

	pub fn pool_mut<T: Component>(&mut self) -> Option<&mut Pool<T>> {
		let component = ComponentRegistry::lookup::<T>()?;
		let pool: &mut dyn ErasedPool = self.pools.get_mut(component.value())?.as_deref_mut()?;
		pool.as_any_mut().downcast_mut::<Pool<T>>()
	}

	/// Bind `tag` to the [entity](Entity). A tag names at most one entity and an entity
	/// carries at most one tag, so any previous binding on either side is dropped.
	pub fn tag_entity(&mut self, entity: Entity, tag: &str) {
		self.assert_alive(entity);
		self.tags.insert(entity, tag);
	}

	pub fn entity_has_tag(&self, entity: Entity, tag: &str) -> bool {
		self.tags.has_tag(entity, tag)
	}

	pub fn get_entity_by_tag(&self, tag: &str) -> Option<Entity> {
		self.tags.entity(tag)
	}

	pub fn entity_tag(&self, entity: Entity) -> Option<&str> {
		self.assert_owned(entity);
		self.tags.tag_of(entity)
	}

	pub fn remove_entity_tag(&mut self, entity: Entity) {
		self.assert_owned(entity);
		self.tags.remove(entity);
	}

	/// Move the [entity](Entity) into `group`, leaving the group it was in before.
	pub fn group_entity(&mut self, entity: Entity, group: &str) {
		self.assert_alive(entity);
		self.groups.insert(entity, group);
	}

	pub fn entity_belongs_to_group(&self, entity: Entity, group: &str) -> bool {
		self.groups.belongs_to(entity, group)
	}

	/// Members of `group`, in id order.
	pub fn get_entities_by_group(&self, group: &str) -> Vec<Entity> {
		self.groups.members(group)
	}

	pub fn entity_group(&self, entity: Entity) -> Option<&str> {
		self.assert_owned(entity);
		self.groups.group_of(entity)
	}

	pub fn remove_entity_group(&mut self, entity: Entity) {
		self.assert_owned(entity);
		self.groups.remove(entity);
	}

	/// Drop every entity and [component](Component) at once.
	/// Component pools are emptied but kept for reuse.
	pub fn clear(&mut self) {
		for pool in self.pools.iter_mut().flatten() {
			pool.clear();
		}

		self.num_entities = 0;
		self.free_ids.clear();
		self.signatures.clear();
		self.alive.clear();
		self.pending_add.clear();
		self.pending_kill.clear();
		self.changed.clear();
		self.tags.clear();
		self.groups.clear();
	}

	pub(crate) fn take_pending(&mut self) -> PendingChanges {
		let killed = mem::take(&mut self.pending_kill);
		let unless_killed = |entity: &Entity| !killed.contains(entity);

		PendingChanges {
			added: mem::take(&mut self.pending_add).into_iter().filter(unless_killed).collect(),
			changed: mem::take(&mut self.changed).into_iter().filter(unless_killed).collect(),
			killed: killed.into_iter().collect(),
		}
	}

	/// Purge every trace of `entity`, then release its id.
	/// The id must not be handed out before the indices are clean.
	pub(crate) fn destroy_entity(&mut self, entity: Entity) {
		let index = entity.id as usize;
		if !self.is_alive(entity) {
			return;
		}

		for pool in self.pools.iter_mut().flatten() {
			if pool.remove_entity(entity.id) {
				tracing::trace!(entity = entity.id, component = pool.component_name(), "purged component");
			}
		}
		self.signatures[index].clear();
		self.tags.remove(entity);
		self.groups.remove(entity);

		self.alive[index] = false;
		self.free_ids.push_back(entity.id);
		tracing::debug!(entity = entity.id, "destroyed entity");
	}

	pub(crate) fn live_entities(&self) -> impl Iterator<Item = (Entity, &Signature)> + Clone + '_ {
		let registry = self.id;
		self.signatures
			.iter()
			.zip(self.alive.iter())
			.enumerate()
			.filter(|(_, (_, alive))| **alive)
			.map(move |(id, (signature, _))| (Entity { id: id as u32, registry }, signature))
	}

	fn pool_entry<T: Component>(&mut self, component: ComponentId) -> &mut Pool<T> {
		let index = component.value();
		if index >= self.pools.len() {
			self.pools.resize_with(index + 1, || None);
		}

		let capacity = self.config.pool_capacity;
		let pool = self.pools[index]
			.get_or_insert_with(|| Box::new(Pool::<T>::with_capacity(capacity)) as Box<dyn ErasedPool>);
		match pool.as_any_mut().downcast_mut::<Pool<T>>() {
			Some(pool) => pool,
			None => unreachable!("pool {} does not store `{}`", index, T::name()),
		}
	}

	fn mark_changed(&mut self, entity: Entity) {
		if !self.pending_add.contains(&entity) {
			self.changed.insert(entity);
		}
	}

	#[inline(always)]
	fn assert_owned(&self, entity: Entity) {
		assert!(
			entity.registry == self.id,
			"{}",
			EcsError::ForeignEntity {
				entity: entity.id,
				registry: self.id
			}
		);
	}

	#[inline(always)]
	fn assert_alive(&self, entity: Entity) {
		self.assert_owned(entity);
		assert!(self.is_alive(entity), "Entity {} has already been destroyed", entity.id);
	}
}

fn missing<T: Component>(entity: Entity) -> EcsError {
	EcsError::MissingComponent {
		entity: entity.id,
		component: T::name(),
	}
}
