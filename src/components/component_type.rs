/// A plain data record that can be attached to an [entity](crate::entities::Entity).
///
/// An entity holds at most one instance of each component type.
/// Usually implemented through #\[derive([`Component`](kestrel_ecs_derive::Component))].
pub trait Component: 'static {
	/// Human-readable name of the component type, used in errors and logs.
	fn name() -> &'static str {
		std::any::type_name::<Self>()
	}
}
