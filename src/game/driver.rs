use crate::game::{AssetStore, MovementSystem, RenderSystem, Renderer};
use crate::config::RegistryConfig;
use crate::error::Result;
use crate::Registry;
use std::time::Duration;

/// Longest step, in seconds, a frame may advance the simulation by.
pub const DEFAULT_MAX_DELTA_TIME: f64 = 0.05;

/// Settings of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
	pub fps: u32,
	pub window_width: u32,
	pub window_height: u32,
	/// RGBA color the target is cleared to before each frame.
	pub clear_color: [u8; 4],
	/// Upper bound, in seconds, on the delta time of a single frame.
	pub max_delta_time: f64,
	pub registry: RegistryConfig,
}

impl GameConfig {
	pub fn millisecs_per_frame(&self) -> u32 {
		1000 / self.fps.max(1)
	}
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			fps: 60,
			window_width: 800,
			window_height: 600,
			clear_color: [255, 0, 0, 255],
			max_delta_time: DEFAULT_MAX_DELTA_TIME,
			registry: RegistryConfig::default(),
		}
	}
}

/// Turns millisecond timestamps into per-frame delta times.
///
/// The first tick yields zero and every delta is clamped to `max_delta_time`, so a stall
/// never advances the simulation by more than one bounded step.
#[derive(Debug, Clone)]
pub struct FrameClock {
	millisecs_per_frame: u32,
	max_delta_time: f64,
	previous_frame: Option<u64>,
}

impl FrameClock {
	pub fn new(millisecs_per_frame: u32, max_delta_time: f64) -> Self {
		Self {
			millisecs_per_frame,
			max_delta_time,
			previous_frame: None,
		}
	}

	/// How long to sleep before starting the next frame so the frame rate stays capped.
	pub fn time_to_wait(&self, now_ms: u64) -> Option<Duration> {
		let elapsed = now_ms.saturating_sub(self.previous_frame?);
		let budget = u64::from(self.millisecs_per_frame);
		match elapsed < budget {
			true => Some(Duration::from_millis(budget - elapsed)),
			false => None,
		}
	}

	/// Seconds elapsed since the previous call, at most `max_delta_time`.
	pub fn tick(&mut self, now_ms: u64) -> f64 {
		let previous = self.previous_frame.replace(now_ms);
		let Some(previous) = previous else {
			return 0.0;
		};

		let delta = now_ms.saturating_sub(previous) as f64 / 1000.0;
		if delta > self.max_delta_time {
			tracing::debug!(delta, clamped = self.max_delta_time, "frame delta clamped");
		}
		delta.min(self.max_delta_time)
	}
}

/// A headless frame driver.
///
/// Each frame runs the [MovementSystem], commits the structural changes made during the
/// frame with [Registry::update], then draws through the [RenderSystem].
pub struct Game<A: AssetStore> {
	config: GameConfig,
	registry: Registry,
	assets: A,
	clock: FrameClock,
	is_running: bool,
}

impl<A: AssetStore> Game<A> {
	pub fn new(config: GameConfig, assets: A) -> Self {
		Self {
			registry: Registry::with_config(config.registry),
			clock: FrameClock::new(config.millisecs_per_frame(), config.max_delta_time),
			config,
			assets,
			is_running: false,
		}
	}

	/// Register the built-in systems and start running.
	pub fn setup(&mut self) {
		if !self.registry.has_system::<MovementSystem>() {
			self.registry.add_system(MovementSystem::new());
		}
		if !self.registry.has_system::<RenderSystem>() {
			self.registry.add_system(RenderSystem::new());
		}
		self.is_running = true;
		tracing::info!(
			width = self.config.window_width,
			height = self.config.window_height,
			fps = self.config.fps,
			"game set up"
		);
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut Registry {
		&mut self.registry
	}

	pub fn assets_mut(&mut self) -> &mut A {
		&mut self.assets
	}

	pub fn clock(&self) -> &FrameClock {
		&self.clock
	}

	pub fn is_running(&self) -> bool {
		self.is_running
	}

	pub fn stop(&mut self) {
		self.is_running = false;
	}

	/// Advance the simulation by `delta_time` seconds and commit pending changes.
	pub fn update(&mut self, delta_time: f64) -> Result<()> {
		self.registry
			.with_system(|movement: &mut MovementSystem, store| movement.update(store, delta_time))
			.unwrap_or(Ok(()))?;
		self.registry.update();
		Ok(())
	}

	pub fn render(&mut self, renderer: &mut impl Renderer) -> Result<()> {
		renderer.clear(self.config.clear_color);
		let assets = &self.assets;
		self.registry
			.with_system(|render: &mut RenderSystem, store| render.update(store, renderer, assets))
			.unwrap_or(Ok(()))?;
		renderer.present();
		Ok(())
	}

	/// Run one frame whose clock reads `now_ms`.
	pub fn run_frame(&mut self, now_ms: u64, renderer: &mut impl Renderer) -> Result<()> {
		let delta_time = self.clock.tick(now_ms);
		self.update(delta_time)?;
		self.render(renderer)
	}
}
