//! Errors reported by the [Registry](crate::Registry) and its collaborators.

use thiserror::Error;

/// Convenience alias for results returned throughout the crate.
pub type Result<T> = std::result::Result<T, EcsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
	/// More distinct component types were registered than a
	/// [Signature](crate::data_structures::Signature) can hold.
	#[error("cannot register component `{type_name}`: the limit of {limit} component types has been reached")]
	ComponentLimitExceeded { limit: usize, type_name: &'static str },

	/// The entity does not hold the requested component.
	#[error("entity {entity} has no component `{component}`")]
	MissingComponent { entity: u32, component: &'static str },

	/// The entity handle was created by a different registry.
	#[error("entity {entity} does not belong to registry {registry}")]
	ForeignEntity { entity: u32, registry: u32 },

	/// An asset identifier could not be resolved by the asset store.
	#[error("no asset registered under `{0}`")]
	MissingAsset(String),
}
