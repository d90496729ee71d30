use crate::game::{
	FrameClock, Game, GameConfig, MovementSystem, Rect, RenderSystem, Renderer, RigidBodyComponent, SpriteComponent,
	TextureHandle, TransformComponent,
};
use crate::error::EcsError;
use std::collections::HashMap;
use std::time::Duration;
use nalgebra_glm::Vec2;
use crate::Registry;

#[derive(Default)]
struct RecordingRenderer {
	clears: usize,
	presents: usize,
	draws: Vec<(TextureHandle, Rect, Rect, f64)>,
}

impl Renderer for RecordingRenderer {
	fn clear(&mut self, _color: [u8; 4]) {
		self.clears += 1;
	}

	fn draw_texture(&mut self, texture: TextureHandle, src: &Rect, dst: &Rect, angle: f64) {
		self.draws.push((texture, *src, *dst, angle));
	}

	fn present(&mut self) {
		self.presents += 1;
	}
}

fn assets() -> HashMap<String, TextureHandle> {
	HashMap::from([
		("tank".to_owned(), TextureHandle(1)),
		("truck".to_owned(), TextureHandle(2)),
		("tree".to_owned(), TextureHandle(3)),
	])
}

#[test]
pub fn movement_integrates_velocity() {
	let mut registry = Registry::new();
	registry.add_system(MovementSystem::new());

	let entity = registry.create_entity();
	registry.add_component(entity, TransformComponent::at(0.0, 0.0));
	registry.add_component(entity, RigidBodyComponent::new(Vec2::new(5.0, 0.0)));
	registry.update();

	let result = registry.with_system(|movement: &mut MovementSystem, store| movement.update(store, 1.0));
	assert_eq!(result, Some(Ok(())));

	let transform = registry.get_component::<TransformComponent>(entity).unwrap();
	assert_eq!(transform.position.x, 5.0);
	assert_eq!(transform.position.y, 0.0);
}

#[test]
pub fn movement_ignores_entities_before_update() {
	let mut registry = Registry::new();
	registry.add_system(MovementSystem::new());

	let entity = registry.create_entity();
	registry.add_component(entity, TransformComponent::at(1.0, 1.0));
	registry.add_component(entity, RigidBodyComponent::new(Vec2::new(2.0, -2.0)));

	registry.with_system(|movement: &mut MovementSystem, store| movement.update(store, 0.5));

	let transform = registry.get_component::<TransformComponent>(entity).unwrap();
	assert_eq!(transform.position, Vec2::new(1.0, 1.0));
}

#[test]
pub fn render_draws_in_ascending_z_order() {
	let mut registry = Registry::new();
	registry.add_system(RenderSystem::new());

	let back = registry.create_entity();
	registry.add_component(back, TransformComponent::at(10.0, 20.0));
	registry.add_component(back, SpriteComponent::new("truck", 32, 32, 2));

	let front = registry.create_entity();
	registry.add_component(
		front,
		TransformComponent::new(Vec2::new(50.0, 60.0), Vec2::new(2.0, 3.0), 45.0),
	);
	registry.add_component(front, SpriteComponent::new("tank", 16, 8, 1).with_source_offset(16, 0));
	registry.update();

	let mut renderer = RecordingRenderer::default();
	let assets = assets();
	let result = registry.with_system(|render: &mut RenderSystem, store| render.update(store, &mut renderer, &assets));
	assert_eq!(result, Some(Ok(())));

	assert_eq!(renderer.draws.len(), 2);
	assert_eq!(renderer.draws[0].0, TextureHandle(1), "The lower z-index should be drawn first");
	assert_eq!(renderer.draws[0].1, Rect::new(16, 0, 16, 8));
	assert_eq!(renderer.draws[0].2, Rect::new(50, 60, 32, 24));
	assert_eq!(renderer.draws[0].3, 45.0);
	assert_eq!(renderer.draws[1].0, TextureHandle(2));
	assert_eq!(renderer.draws[1].2, Rect::new(10, 20, 32, 32));
}

#[test]
pub fn render_reports_missing_assets() {
	let mut registry = Registry::new();
	registry.add_system(RenderSystem::new());

	let entity = registry.create_entity();
	registry.add_component(entity, TransformComponent::default());
	registry.add_component(entity, SpriteComponent::new("unknown", 8, 8, 0));
	registry.update();

	let mut renderer = RecordingRenderer::default();
	let assets = assets();
	let result = registry.with_system(|render: &mut RenderSystem, store| render.update(store, &mut renderer, &assets));
	assert_eq!(result, Some(Err(EcsError::MissingAsset("unknown".to_owned()))));
	assert!(renderer.draws.is_empty());
}

#[test]
pub fn game_runs_frames() {
	let mut game = Game::new(GameConfig::default(), assets());
	game.setup();
	assert!(game.is_running());

	let registry = game.registry_mut();
	let tank = registry.create_entity();
	registry.add_component(tank, TransformComponent::at(0.0, 0.0));
	registry.add_component(tank, RigidBodyComponent::new(Vec2::new(10.0, 0.0)));
	registry.add_component(tank, SpriteComponent::new("tank", 32, 32, 1));
	let tree = registry.create_entity();
	registry.add_component(tree, TransformComponent::at(100.0, 100.0));
	registry.add_component(tree, SpriteComponent::new("tree", 16, 32, 0));

	let mut renderer = RecordingRenderer::default();

	// Nothing moves or draws until the first sync point has run.
	game.run_frame(0, &mut renderer).unwrap();
	assert_eq!(renderer.draws.len(), 2, "The update inside the frame commits the new entities");
	assert_eq!(renderer.draws[0].0, TextureHandle(3));

	game.run_frame(40, &mut renderer).unwrap();
	let position = game.registry().get_component::<TransformComponent>(tank).unwrap().position;
	assert!((position.x - 0.4).abs() < 1e-5, "Expected the tank at x = 0.4, found {}", position.x);
	assert_eq!(position.y, 0.0);

	// A stall only advances the world by one clamped step.
	game.run_frame(10_040, &mut renderer).unwrap();
	let position = game.registry().get_component::<TransformComponent>(tank).unwrap().position;
	assert!((position.x - 0.9).abs() < 1e-5, "Expected the tank at x = 0.9, found {}", position.x);

	assert_eq!(renderer.clears, 3);
	assert_eq!(renderer.presents, 3);

	game.stop();
	assert!(!game.is_running());
}

#[test]
pub fn frame_clock() {
	let config = GameConfig::default();
	assert_eq!(config.millisecs_per_frame(), 16);

	let mut clock = FrameClock::new(config.millisecs_per_frame(), config.max_delta_time);
	assert_eq!(clock.time_to_wait(1000), None, "Nothing to wait for before the first frame");
	assert_eq!(clock.tick(1000), 0.0, "The first frame should not move anything");
	assert_eq!(clock.time_to_wait(1010), Some(Duration::from_millis(6)));
	assert_eq!(clock.time_to_wait(1016), None);
	assert_eq!(clock.tick(1020), 0.02);
}

#[test]
pub fn frame_clock_clamps_long_gaps() {
	let mut clock = FrameClock::new(16, 0.05);
	clock.tick(0);

	assert_eq!(clock.tick(5_000), 0.05);
	assert_eq!(clock.tick(5_030), 0.03);
	assert_eq!(clock.tick(5_030), 0.0);
	assert_eq!(clock.tick(4_000), 0.0, "A clock going backwards should not produce a negative step");
}
