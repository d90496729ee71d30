use std::collections::{BTreeSet, HashMap};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::entities::Entity;

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// One-to-one index between tag names and entities.
#[derive(Default)]
pub(crate) struct TagIndex {
	entities: HashMap<String, Entity>,
	tags: HashMap<u32, String, Hasher>,
}

impl TagIndex {
	/// Bind `tag` to `entity`, dropping whatever tag `entity` held
	/// and whatever entity `tag` was bound to.
	pub fn insert(&mut self, entity: Entity, tag: &str) {
		self.remove(entity);
		if let Some(previous) = self.entities.remove(tag) {
			self.tags.remove(&previous.id());
		}

		self.entities.insert(tag.to_owned(), entity);
		self.tags.insert(entity.id(), tag.to_owned());
	}

	pub fn has_tag(&self, entity: Entity, tag: &str) -> bool {
		self.entities.get(tag) == Some(&entity)
	}

	pub fn entity(&self, tag: &str) -> Option<Entity> {
		self.entities.get(tag).copied()
	}

	pub fn tag_of(&self, entity: Entity) -> Option<&str> {
		self.tags.get(&entity.id()).map(String::as_str)
	}

	pub fn remove(&mut self, entity: Entity) {
		if let Some(tag) = self.tags.remove(&entity.id()) {
			self.entities.remove(&tag);
		}
	}

	pub fn clear(&mut self) {
		self.entities.clear();
		self.tags.clear();
	}
}

/// Index of named groups. An entity belongs to at most one group.
#[derive(Default)]
pub(crate) struct GroupIndex {
	members: HashMap<String, BTreeSet<Entity>>,
	groups: HashMap<u32, String, Hasher>,
}

impl GroupIndex {
	/// Move `entity` into `group`, leaving any group it belonged to before.
	pub fn insert(&mut self, entity: Entity, group: &str) {
		self.remove(entity);
		self.members.entry(group.to_owned()).or_default().insert(entity);
		self.groups.insert(entity.id(), group.to_owned());
	}

	pub fn belongs_to(&self, entity: Entity, group: &str) -> bool {
		self.members.get(group).map_or(false, |members| members.contains(&entity))
	}

	pub fn members(&self, group: &str) -> Vec<Entity> {
		match self.members.get(group) {
			Some(members) => members.iter().copied().collect(),
			None => Vec::new(),
		}
	}

	pub fn group_of(&self, entity: Entity) -> Option<&str> {
		self.groups.get(&entity.id()).map(String::as_str)
	}

	pub fn remove(&mut self, entity: Entity) {
		let Some(group) = self.groups.remove(&entity.id()) else {
			return;
		};

		if let Some(members) = self.members.get_mut(&group) {
			members.remove(&entity);
			if members.is_empty() {
				self.members.remove(&group);
			}
		}
	}

	pub fn clear(&mut self) {
		self.members.clear();
		self.groups.clear();
	}
}
