use crate::game::{AssetStore, Rect, Renderer, SpriteComponent, TransformComponent};
use crate::systems::{System, SystemBase};
use crate::error::{EcsError, Result};
use crate::entities::EntityStore;

/// Draws every entity with a [TransformComponent] and a [SpriteComponent],
/// in ascending [z_index](SpriteComponent::z_index) order.
pub struct RenderSystem {
	base: SystemBase,
}

impl RenderSystem {
	pub fn new() -> Self {
		let base = SystemBase::new()
			.with_component::<TransformComponent>()
			.with_component::<SpriteComponent>();
		Self { base }
	}

	pub fn update(&self, store: &EntityStore, renderer: &mut impl Renderer, assets: &impl AssetStore) -> Result<()> {
		let mut drawables = Vec::with_capacity(self.base.len());
		for entity in self.base.entities() {
			let transform = store.get_component::<TransformComponent>(*entity)?;
			let sprite = store.get_component::<SpriteComponent>(*entity)?;
			drawables.push((transform, sprite));
		}

		// Stable, so sprites sharing a layer keep system order.
		drawables.sort_by_key(|(_, sprite)| sprite.z_index);

		for (transform, sprite) in drawables {
			let texture = assets
				.get_texture(&sprite.asset_id)
				.ok_or_else(|| EcsError::MissingAsset(sprite.asset_id.clone()))?;

			let dst = Rect::new(
				transform.position.x as i32,
				transform.position.y as i32,
				(sprite.width as f32 * transform.scale.x) as i32,
				(sprite.height as f32 * transform.scale.y) as i32,
			);
			renderer.draw_texture(texture, &sprite.src_rect, &dst, transform.rotation);
		}
		Ok(())
	}
}

impl Default for RenderSystem {
	fn default() -> Self {
		Self::new()
	}
}

impl System for RenderSystem {
	fn base(&self) -> &SystemBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut SystemBase {
		&mut self.base
	}
}
