use crate::data_structures::DEFAULT_POOL_CAPACITY;

/// Tuning knobs for a [Registry](crate::Registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
	/// Number of slots reserved by each component pool when it is created.
	pub pool_capacity: usize,
	/// Number of entity ids to reserve signature space for up front.
	pub entity_capacity: usize,
}

impl RegistryConfig {
	pub fn with_pool_capacity(mut self, pool_capacity: usize) -> Self {
		self.pool_capacity = pool_capacity;
		self
	}

	pub fn with_entity_capacity(mut self, entity_capacity: usize) -> Self {
		self.entity_capacity = entity_capacity;
		self
	}
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			pool_capacity: DEFAULT_POOL_CAPACITY,
			entity_capacity: 0,
		}
	}
}
