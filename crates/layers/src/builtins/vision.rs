//! Spatial layers.

use brew_proto::LayerParameter;

use crate::engine::{CudnnRestriction, EngineFamily};
use crate::global::LayerPrecision;
use crate::layer::{LayerResult, construct};

define_layer!(
	/// Native convolution.
	pub struct ConvolutionLayer
);
define_layer!(
	/// Native max, average or stochastic pooling.
	pub struct PoolingLayer
);
define_layer!(
	/// Unrolls image patches into columns.
	pub struct Im2colLayer
);
define_layer!(
	/// Local response normalization.
	pub struct LrnLayer
);

pub(crate) fn convolution_family<P: LayerPrecision>() -> EngineFamily<P> {
	EngineFamily {
		name: "convolution",
		native: construct::<P, ConvolutionLayer<P>>,
		cudnn: cudnn_creator!(CudnnConvolutionLayer),
		restriction: None,
	}
}

/// cuDNN pooling supports neither padding nor a second (mask) output.
fn cudnn_cannot_pool(param: &LayerParameter) -> bool {
	param.pooling_param.requests_padding() || param.top_size() > 1
}

pub(crate) const CUDNN_POOLING: CudnnRestriction = CudnnRestriction {
	applies: cudnn_cannot_pool,
	reason: "cuDNN does not support padding or multiple tops.",
};

pub(crate) fn pooling_family<P: LayerPrecision>() -> EngineFamily<P> {
	EngineFamily {
		name: "pooling",
		native: construct::<P, PoolingLayer<P>>,
		cudnn: cudnn_creator!(CudnnPoolingLayer),
		restriction: Some(CUDNN_POOLING),
	}
}

fn convolution_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	convolution_family::<P>().create(param, param.convolution_param.engine)
}

fn pooling_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	pooling_family::<P>().create(param, param.pooling_param.engine)
}

register_layer_creator!(Convolution, convolution_layer);
register_layer_creator!(Pooling, pooling_layer);
register_layer_class!(Im2col, Im2colLayer);
register_layer_class!(Lrn, LrnLayer);
