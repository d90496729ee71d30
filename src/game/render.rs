use std::collections::HashMap;

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
	pub x: i32,
	pub y: i32,
	pub w: i32,
	pub h: i32,
}

impl Rect {
	pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
		Self { x, y, w, h }
	}
}

/// Opaque handle to a texture owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Resolves asset identifiers to textures.
pub trait AssetStore {
	fn get_texture(&self, asset_id: &str) -> Option<TextureHandle>;
}

impl AssetStore for HashMap<String, TextureHandle> {
	fn get_texture(&self, asset_id: &str) -> Option<TextureHandle> {
		self.get(asset_id).copied()
	}
}

/// The drawing surface a frame is presented on.
pub trait Renderer {
	/// Fill the whole target with an RGBA color.
	fn clear(&mut self, color: [u8; 4]);

	/// Copy the `src` region of `texture` onto the `dst` region of the target,
	/// rotated clockwise by `angle` degrees around the center of `dst`.
	fn draw_texture(&mut self, texture: TextureHandle, src: &Rect, dst: &Rect, angle: f64);

	/// Show everything drawn since the last [clear](Self::clear).
	fn present(&mut self);
}
