use crate::systems::{System, SystemBase};
use crate::components::Component;

mod signature_tests;
mod tag_group_tests;
mod game_tests;

#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
	pub x: f32,
	pub y: f32,
}

#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
	pub x: f32,
	pub y: f32,
}

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Health(pub u32);

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Frozen;

/// Tracks entities with a [Position].
pub struct PositionSystem {
	base: SystemBase,
}

impl PositionSystem {
	pub fn new() -> Self {
		Self {
			base: SystemBase::new().with_component::<Position>(),
		}
	}
}

impl System for PositionSystem {
	fn base(&self) -> &SystemBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut SystemBase {
		&mut self.base
	}
}

/// Tracks entities with a [Position] and a [Velocity].
pub struct PhysicsSystem {
	base: SystemBase,
}

impl PhysicsSystem {
	pub fn new() -> Self {
		let mut base = SystemBase::new();
		base.require_component::<Position>();
		base.require_component::<Velocity>();
		Self { base }
	}
}

impl System for PhysicsSystem {
	fn base(&self) -> &SystemBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut SystemBase {
		&mut self.base
	}
}

/// Tracks every entity.
#[derive(Default)]
pub struct EverythingSystem {
	base: SystemBase,
}

impl System for EverythingSystem {
	fn base(&self) -> &SystemBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut SystemBase {
		&mut self.base
	}
}
