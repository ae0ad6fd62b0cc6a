//! The layer contract.

use std::any::Any;
use std::fmt;

use brew_proto::{Engine, LayerParameter, LayerType};

use crate::error::LayerError;
use crate::global::LayerPrecision;

/// A constructed layer instance, exclusively owned by its caller.
///
/// `P` is the precision the instance computes in. Instances remember the
/// configuration they were built from.
pub trait Layer<P: LayerPrecision>: Any + Send + fmt::Debug {
	/// Configuration this instance was constructed from.
	fn param(&self) -> &LayerParameter;

	/// Instance name from the configuration.
	fn name(&self) -> &str {
		&self.param().name
	}

	fn layer_type(&self) -> LayerType {
		self.param().layer_type
	}

	/// Backing implementation. Never [`Engine::Default`].
	fn engine(&self) -> Engine;

	/// Concrete type name, for diagnostics.
	fn type_name(&self) -> &'static str;

	fn as_any(&self) -> &dyn Any;
}

/// A layer type constructible from its configuration alone.
pub trait LayerClass<P: LayerPrecision>: Layer<P> + Sized {
	fn from_param(param: &LayerParameter) -> Self;
}

pub type LayerResult<P> = Result<Box<dyn Layer<P>>, LayerError>;

/// Constructs a layer from a configuration.
///
/// Stored in a registry as a plain function pointer and invoked on each
/// lookup. Creators must not retain the configuration reference.
pub type LayerCreator<P> = fn(&LayerParameter) -> LayerResult<P>;

/// Creator for any [`LayerClass`]: `L::from_param`, boxed.
pub fn construct<P: LayerPrecision, L: LayerClass<P>>(param: &LayerParameter) -> LayerResult<P> {
	Ok(Box::new(L::from_param(param)))
}
