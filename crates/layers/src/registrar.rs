//! Link-time registration records.
//!
//! [`register_layer_class!`] and [`register_layer_creator!`] submit one
//! [`LayerRegistrar`] per precision. The global registries collect them
//! when they bootstrap.

use brew_factory::RegistryError;
use brew_proto::LayerType;
use tracing::debug;

use crate::global::LayerPrecision;
use crate::layer::LayerCreator;
use crate::registry::LayerRegistry;

/// One `(kind, creator)` pair waiting to enter the registry of precision `P`.
pub struct LayerRegistrar<P: LayerPrecision> {
	pub kind: LayerType,
	pub creator: LayerCreator<P>,
	/// Module that submitted the registration.
	pub origin: &'static str,
}

impl<P: LayerPrecision> LayerRegistrar<P> {
	pub const fn new(kind: LayerType, creator: LayerCreator<P>, origin: &'static str) -> Self {
		Self { kind, creator, origin }
	}

	pub fn register_into(&self, registry: &mut LayerRegistry<P>) -> Result<(), RegistryError> {
		registry.add_creator(self.kind, self.creator)
	}
}

inventory::collect!(LayerRegistrar<f32>);
inventory::collect!(LayerRegistrar<f64>);

/// Enters every submitted registrar of precision `P` into `registry`.
///
/// Submission order is unspecified, so a duplicate is reported against
/// whichever registrar happens to come second.
pub(crate) fn bootstrap<P>(registry: &mut LayerRegistry<P>) -> Result<(), RegistryError>
where
	P: LayerPrecision,
	LayerRegistrar<P>: inventory::Collect,
{
	let mut count = 0usize;
	for registrar in inventory::iter::<LayerRegistrar<P>> {
		if let Err(err) = registrar.register_into(registry) {
			debug!(origin = registrar.origin, kind = %registrar.kind, "conflicting layer registration");
			return Err(err);
		}
		count += 1;
	}
	debug!(precision = P::NAME, count, "collected layer registrations");
	Ok(())
}

#[cfg(test)]
mod tests;
