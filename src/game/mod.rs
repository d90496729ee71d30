//! A thin game layer on top of the [Registry](crate::Registry): the usual 2D components,
//! a movement and a render [system](crate::systems::System), the interfaces of the
//! rendering and asset collaborators, and a frame driver tying them together.

mod components;
mod driver;
mod movement_system;
mod render;
mod render_system;

pub use components::*;
pub use driver::*;
pub use movement_system::*;
pub use render::*;
pub use render_system::*;
