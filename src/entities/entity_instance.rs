use crate::entities::EntityStore;
use crate::components::Component;
use crate::error::Result;

/// A lightweight handle to an entity.
///
/// Handles are plain values and do not keep the entity alive. The id is only unique among
/// live entities: once an entity is destroyed, its id is handed out again.
/// Handles carry no generation, so a handle kept past its entity's destruction refers to
/// whichever entity later receives the same id, and every method treats it as that entity.
/// The convenience methods take the owning [EntityStore] explicitly;
/// a [Registry](crate::Registry) can be passed directly.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) id: u32,
	pub(crate) registry: u32,
}

impl Entity {
	#[inline(always)]
	pub const fn id(&self) -> u32 {
		self.id
	}

	/// Schedule the entity for destruction at the next sync point.
	pub fn kill(self, store: &mut EntityStore) {
		store.kill_entity(self)
	}

	pub fn add_component<T: Component>(self, store: &mut EntityStore, value: T) {
		store.add_component(self, value)
	}

	pub fn remove_component<T: Component>(self, store: &mut EntityStore) -> Option<T> {
		store.remove_component::<T>(self)
	}

	pub fn has_component<T: Component>(self, store: &EntityStore) -> bool {
		store.has_component::<T>(self)
	}

	pub fn get_component<T: Component>(self, store: &EntityStore) -> Result<&T> {
		store.get_component::<T>(self)
	}

	pub fn get_component_mut<T: Component>(self, store: &mut EntityStore) -> Result<&mut T> {
		store.get_component_mut::<T>(self)
	}

	pub fn tag(self, store: &mut EntityStore, tag: &str) {
		store.tag_entity(self, tag)
	}

	pub fn has_tag(self, store: &EntityStore, tag: &str) -> bool {
		store.entity_has_tag(self, tag)
	}

	pub fn group(self, store: &mut EntityStore, group: &str) {
		store.group_entity(self, group)
	}

	pub fn belongs_to_group(self, store: &EntityStore, group: &str) -> bool {
		store.entity_belongs_to_group(self, group)
	}
}
