//! [Components](Component) are the plain data records attached to
//! [entities](crate::entities::Entity).
//!
//! Every component type is given a small, process-wide [ComponentId] the first time it is
//! registered. Ids index the bits of a [Signature](crate::data_structures::Signature).

mod component_id;
mod component_type;

pub use component_id::*;
pub use component_type::*;
pub use kestrel_ecs_derive::Component;
