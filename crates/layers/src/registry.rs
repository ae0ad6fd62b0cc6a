//! Per-precision table from layer kind to creator.

use std::fmt;

use brew_factory::{Registry, RegistryError};
use brew_proto::{LayerParameter, LayerType};
use tracing::info;

use crate::global::LayerPrecision;
use crate::layer::{LayerCreator, LayerResult};

/// Layer creators for one precision.
///
/// The process-wide instances live behind [`LayerPrecision::layer_registry`];
/// standalone instances are useful for tests and embedding.
pub struct LayerRegistry<P: LayerPrecision> {
	creators: Registry<LayerType, LayerCreator<P>>,
}

impl<P: LayerPrecision> LayerRegistry<P> {
	pub fn new() -> Self {
		Self {
			creators: Registry::new("Layer"),
		}
	}

	/// Registers `creator` for `kind`. A kind can be registered once.
	pub fn add_creator(&mut self, kind: LayerType, creator: LayerCreator<P>) -> Result<(), RegistryError> {
		self.creators.register(kind, creator)
	}

	/// Looks up the creator for `kind` without invoking it.
	pub fn creator(&self, kind: LayerType) -> Result<LayerCreator<P>, RegistryError> {
		self.creators.get(&kind).copied()
	}

	/// Constructs a layer for `param` with the creator registered for its kind.
	pub fn create_layer(&self, param: &LayerParameter) -> LayerResult<P> {
		instantiate(param, |kind| self.creator(kind))
	}

	/// Registered kinds in wire order.
	pub fn layer_types(&self) -> Vec<LayerType> {
		self.creators.keys()
	}

	pub fn contains(&self, kind: LayerType) -> bool {
		self.creators.contains(&kind)
	}

	pub fn len(&self) -> usize {
		self.creators.len()
	}

	pub fn is_empty(&self) -> bool {
		self.creators.is_empty()
	}
}

impl<P: LayerPrecision> Default for LayerRegistry<P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<P: LayerPrecision> fmt::Debug for LayerRegistry<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LayerRegistry")
			.field("precision", &P::NAME)
			.field("kinds", &self.layer_types())
			.finish()
	}
}

/// Resolves and invokes the creator for `param`.
///
/// The lookup returns the creator by value so that no registry lock is held
/// while it runs.
pub(crate) fn instantiate<P, F>(param: &LayerParameter, lookup: F) -> LayerResult<P>
where
	P: LayerPrecision,
	F: FnOnce(LayerType) -> Result<LayerCreator<P>, RegistryError>,
{
	info!("Creating layer {}", param.name);
	let creator = lookup(param.layer_type)?;
	creator(param)
}
