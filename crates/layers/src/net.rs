//! Building every layer of a network description.

use brew_proto::NetParameter;
use tracing::info;

use crate::error::Result;
use crate::global::{LayerPrecision, create_layer};
use crate::layer::Layer;

/// Constructs the layers of `net` in declaration order from the global
/// registry of precision `P`. Stops at the first failure.
pub fn create_net<P: LayerPrecision>(net: &NetParameter) -> Result<Vec<Box<dyn Layer<P>>>> {
	info!(precision = P::NAME, layers = net.layers.len(), "Initializing net {}", net.name);
	net.layers.iter().map(create_layer::<P>).collect()
}

#[cfg(test)]
mod tests;
