use crate::game::{RigidBodyComponent, TransformComponent};
use crate::systems::{System, SystemBase};
use crate::entities::EntityStore;
use crate::error::Result;

/// Moves every entity with a [TransformComponent] and a [RigidBodyComponent]
/// along its velocity.
pub struct MovementSystem {
	base: SystemBase,
}

impl MovementSystem {
	pub fn new() -> Self {
		let base = SystemBase::new()
			.with_component::<TransformComponent>()
			.with_component::<RigidBodyComponent>();
		Self { base }
	}

	/// Advance each position by `velocity * delta_time`, with `delta_time` in seconds.
	pub fn update(&self, store: &mut EntityStore, delta_time: f64) -> Result<()> {
		for entity in self.base.entities() {
			let velocity = store.get_component::<RigidBodyComponent>(*entity)?.velocity;
			let transform = store.get_component_mut::<TransformComponent>(*entity)?;
			transform.position += velocity * delta_time as f32;

			tracing::trace!(
				entity = entity.id(),
				x = transform.position.x,
				y = transform.position.y,
				"entity moved"
			);
		}
		Ok(())
	}
}

impl Default for MovementSystem {
	fn default() -> Self {
		Self::new()
	}
}

impl System for MovementSystem {
	fn base(&self) -> &SystemBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut SystemBase {
		&mut self.base
	}
}
