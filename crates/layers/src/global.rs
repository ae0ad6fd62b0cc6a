//! The process-wide layer registries, one per precision.

use brew_factory::{GlobalRegistry, Precision, RegistryError};
use brew_proto::{LayerParameter, LayerType};
use tracing::error;

use crate::layer::{Layer, LayerCreator, LayerResult};
use crate::registrar::bootstrap;
use crate::registry::{LayerRegistry, instantiate};

static FLOAT_LAYERS: GlobalRegistry<LayerRegistry<f32>> =
	GlobalRegistry::new("Layer", LayerRegistry::new, bootstrap::<f32>);
static DOUBLE_LAYERS: GlobalRegistry<LayerRegistry<f64>> =
	GlobalRegistry::new("Layer", LayerRegistry::new, bootstrap::<f64>);

/// A [`Precision`] with its own process-wide layer registry.
///
/// The two registries are fully independent: registering a kind for `f32`
/// says nothing about `f64`.
pub trait LayerPrecision: Precision {
	fn layer_registry() -> &'static GlobalRegistry<LayerRegistry<Self>>;
}

impl LayerPrecision for f32 {
	fn layer_registry() -> &'static GlobalRegistry<LayerRegistry<Self>> {
		&FLOAT_LAYERS
	}
}

impl LayerPrecision for f64 {
	fn layer_registry() -> &'static GlobalRegistry<LayerRegistry<Self>> {
		&DOUBLE_LAYERS
	}
}

/// Registers `creator` for `kind` in the global registry of precision `P`.
///
/// Kinds registered at link time are already present, so re-registering
/// one of them fails with [`RegistryError::Duplicate`].
pub fn add_creator<P: LayerPrecision>(kind: LayerType, creator: LayerCreator<P>) -> Result<(), RegistryError> {
	P::layer_registry().write().add_creator(kind, creator)
}

/// Constructs a layer for `param` from the global registry of precision `P`.
pub fn create_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	instantiate(param, |kind| P::layer_registry().read().creator(kind))
}

/// Like [`create_layer`], but any failure is fatal.
///
/// # Panics
///
/// Panics if the kind is unregistered or its creator fails.
pub fn get_layer<P: LayerPrecision>(param: &LayerParameter) -> Box<dyn Layer<P>> {
	match create_layer::<P>(param) {
		Ok(layer) => layer,
		Err(err) => {
			error!(precision = P::NAME, layer = %param.name, "{err}");
			panic!("{err}");
		}
	}
}

/// Kinds registered in the global registry of precision `P`, in wire order.
pub fn registered_layer_types<P: LayerPrecision>() -> Vec<LayerType> {
	P::layer_registry().read().layer_types()
}

#[cfg(test)]
mod tests;
