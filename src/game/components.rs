use crate::components::Component;
use crate::game::Rect;
use nalgebra_glm::Vec2;

/// Position, scale and rotation (in degrees) of an entity in the world.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TransformComponent {
	pub position: Vec2,
	pub scale: Vec2,
	pub rotation: f64,
}

impl TransformComponent {
	pub fn new(position: Vec2, scale: Vec2, rotation: f64) -> Self {
		Self { position, scale, rotation }
	}

	pub fn at(x: f32, y: f32) -> Self {
		Self {
			position: Vec2::new(x, y),
			..Self::default()
		}
	}
}

impl Default for TransformComponent {
	fn default() -> Self {
		Self {
			position: Vec2::zeros(),
			scale: Vec2::new(1.0, 1.0),
			rotation: 0.0,
		}
	}
}

/// Linear velocity, in world units per second.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct RigidBodyComponent {
	pub velocity: Vec2,
}

impl RigidBodyComponent {
	pub fn new(velocity: Vec2) -> Self {
		Self { velocity }
	}
}

/// Describes which part of which texture to draw for an entity, and in which layer.
/// Sprites with a lower `z_index` are drawn first.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteComponent {
	pub asset_id: String,
	pub width: u32,
	pub height: u32,
	pub z_index: i32,
	pub src_rect: Rect,
}

impl SpriteComponent {
	/// A sprite covering the top-left `width` x `height` region of its texture.
	pub fn new(asset_id: impl Into<String>, width: u32, height: u32, z_index: i32) -> Self {
		Self {
			asset_id: asset_id.into(),
			width,
			height,
			z_index,
			src_rect: Rect::new(0, 0, width as i32, height as i32),
		}
	}

	/// Move the source rectangle to (`x`, `y`) within the texture.
	pub fn with_source_offset(mut self, x: i32, y: i32) -> Self {
		self.src_rect.x = x;
		self.src_rect.y = y;
		self
	}
}
