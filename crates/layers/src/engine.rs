//! Engine selection for layer families with more than one implementation.
//!
//! A family has a native implementation that is always compiled in and a
//! cuDNN implementation that may not be. The configured [`Engine`] picks
//! one; [`Engine::Default`] resolves against what the build provides.

use brew_proto::{Engine, LayerParameter};
use tracing::info;

use crate::error::LayerError;
use crate::global::LayerPrecision;
use crate::layer::{LayerCreator, LayerResult};

/// Resolves [`Engine::Default`]: cuDNN when it is compiled in, native otherwise.
///
/// Explicit engines pass through unchanged, even when unavailable.
pub fn resolve_engine(requested: Engine, cudnn_available: bool) -> Engine {
	match requested {
		Engine::Default if cudnn_available => Engine::Cudnn,
		Engine::Default => Engine::Native,
		explicit => explicit,
	}
}

/// The implementation a family settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
	Native,
	Cudnn,
	/// cuDNN was chosen but cannot serve the configuration; native runs instead.
	Downgraded,
}

/// A configuration the cuDNN implementation of a family cannot handle.
#[derive(Debug, Clone, Copy)]
pub struct CudnnRestriction {
	/// Returns true when the configuration is outside what cuDNN supports.
	pub applies: fn(&LayerParameter) -> bool,
	/// Logged when falling back, e.g. `"cuDNN does not support padding."`.
	pub reason: &'static str,
}

/// The implementations of one engine-selecting layer family.
pub struct EngineFamily<P: LayerPrecision> {
	/// Lower-case family name used in log messages.
	pub name: &'static str,
	pub native: LayerCreator<P>,
	/// `None` when cuDNN support is not compiled in.
	pub cudnn: Option<LayerCreator<P>>,
	pub restriction: Option<CudnnRestriction>,
}

impl<P: LayerPrecision> EngineFamily<P> {
	/// Decides which implementation serves `param` under `requested`.
	pub fn select(&self, param: &LayerParameter, requested: Engine) -> Result<Selection, LayerError> {
		match resolve_engine(requested, self.cudnn.is_some()) {
			Engine::Native => Ok(Selection::Native),
			Engine::Cudnn if self.cudnn.is_some() => match self.restriction {
				Some(restriction) if (restriction.applies)(param) => {
					info!(layer = %param.name, "{} Using native {} layer.", restriction.reason, self.name);
					Ok(Selection::Downgraded)
				}
				_ => Ok(Selection::Cudnn),
			},
			engine => Err(LayerError::UnknownEngine {
				name: param.name.clone(),
				engine,
			}),
		}
	}

	/// Selects an implementation and constructs it.
	pub fn create(&self, param: &LayerParameter, requested: Engine) -> LayerResult<P> {
		match (self.select(param, requested)?, self.cudnn) {
			(Selection::Cudnn, Some(cudnn)) => cudnn(param),
			_ => (self.native)(param),
		}
	}
}
