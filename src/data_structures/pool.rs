use crate::components::Component;
use crate::error::{EcsError, Result};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use rayon::prelude::*;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// Number of slots a [Pool] reserves when it is first created.
pub const DEFAULT_POOL_CAPACITY: usize = 100;

/// Packed storage for every instance of one [component](Component) type.
///
/// Values live in a dense [Vec] with no gaps. Two index maps translate between entity ids
/// and dense positions, so insertion, lookup and removal are all O(1).
/// Removing a value moves the last value into the freed slot,
/// so iteration order is storage order, not entity order.
pub struct Pool<T: Component> {
	data: Vec<T>,
	entities: Vec<u32>,
	indices: HashMap<u32, usize, Hasher>,
}

impl<T: Component> Pool<T> {
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_POOL_CAPACITY)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			entities: Vec::with_capacity(capacity),
			indices: HashMap::with_capacity_and_hasher(capacity, Hasher::default()),
		}
	}

	/// Store `value` for `entity`, overwriting any value already present.
	pub fn set(&mut self, entity: u32, value: T) {
		match self.indices.get(&entity) {
			Some(index) => self.data[*index] = value,
			None => {
				self.indices.insert(entity, self.data.len());
				self.entities.push(entity);
				self.data.push(value);
			},
		}
	}

	/// Remove the value stored for `entity`, if any.
	pub fn remove(&mut self, entity: u32) -> Option<T> {
		let index = self.indices.remove(&entity)?;
		let value = self.data.swap_remove(index);
		self.entities.swap_remove(index);

		if let Some(moved) = self.entities.get(index) {
			self.indices.insert(*moved, index);
		}

		Some(value)
	}

	pub fn get(&self, entity: u32) -> Result<&T> {
		match self.indices.get(&entity) {
			Some(index) => Ok(&self.data[*index]),
			None => Err(missing::<T>(entity)),
		}
	}

	pub fn get_mut(&mut self, entity: u32) -> Result<&mut T> {
		match self.indices.get(&entity) {
			Some(index) => Ok(&mut self.data[*index]),
			None => Err(missing::<T>(entity)),
		}
	}

	#[inline(always)]
	pub fn contains(&self, entity: u32) -> bool {
		self.indices.contains_key(&entity)
	}

	pub fn clear(&mut self) {
		self.data.clear();
		self.entities.clear();
		self.indices.clear();
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The densely packed values, in storage order.
	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.data
	}

	/// The entity owning each slot of [as_slice](Self::as_slice).
	pub fn entities(&self) -> &[u32] {
		&self.entities
	}

	/// Iterate `(entity, value)` pairs in storage order.
	pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
		self.entities.iter().copied().zip(self.data.iter())
	}

	/// Iterate `(entity, value)` pairs in storage order.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
		self.entities.iter().copied().zip(self.data.iter_mut())
	}

	/// Visit every value in parallel with the provided function.
	pub fn par_for_each_mut(&mut self, func: impl Fn(u32, &mut T) + Send + Sync)
	where
		T: Send,
	{
		self.entities
			.par_iter()
			.zip(self.data.par_iter_mut())
			.for_each(|(entity, value)| func(*entity, value));
	}
}

impl<T: Component> Default for Pool<T> {
	fn default() -> Self {
		Self::new()
	}
}

fn missing<T: Component>(entity: u32) -> EcsError {
	EcsError::MissingComponent {
		entity,
		component: T::name(),
	}
}

/// The type-independent part of a [Pool], used by the
/// [EntityStore](crate::entities::EntityStore) to purge entities from every pool
/// without knowing the component types.
pub trait ErasedPool {
	/// Remove the value stored for `entity`, returning whether there was one.
	fn remove_entity(&mut self, entity: u32) -> bool;
	fn clear(&mut self);
	fn component_name(&self) -> &'static str;
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedPool for Pool<T> {
	fn remove_entity(&mut self, entity: u32) -> bool {
		self.remove(entity).is_some()
	}

	fn clear(&mut self) {
		Pool::clear(self)
	}

	fn component_name(&self) -> &'static str {
		T::name()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
