//! Element-wise activation layers.

use brew_proto::LayerParameter;

use crate::engine::EngineFamily;
use crate::global::LayerPrecision;
use crate::layer::{LayerResult, construct};

define_layer!(pub struct AbsValLayer);
define_layer!(pub struct BnllLayer);
define_layer!(pub struct DropoutLayer);
define_layer!(pub struct ExpLayer);
define_layer!(pub struct PowerLayer);
define_layer!(pub struct ThresholdLayer);
define_layer!(
	/// Native rectified linear unit, leaky when `negative_slope` is set.
	pub struct ReluLayer
);
define_layer!(pub struct SigmoidLayer);
define_layer!(pub struct TanhLayer);

pub(crate) fn relu_family<P: LayerPrecision>() -> EngineFamily<P> {
	EngineFamily {
		name: "relu",
		native: construct::<P, ReluLayer<P>>,
		cudnn: cudnn_creator!(CudnnReluLayer),
		restriction: None,
	}
}

pub(crate) fn sigmoid_family<P: LayerPrecision>() -> EngineFamily<P> {
	EngineFamily {
		name: "sigmoid",
		native: construct::<P, SigmoidLayer<P>>,
		cudnn: cudnn_creator!(CudnnSigmoidLayer),
		restriction: None,
	}
}

pub(crate) fn tanh_family<P: LayerPrecision>() -> EngineFamily<P> {
	EngineFamily {
		name: "tanh",
		native: construct::<P, TanhLayer<P>>,
		cudnn: cudnn_creator!(CudnnTanhLayer),
		restriction: None,
	}
}

fn relu_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	relu_family::<P>().create(param, param.relu_param.engine)
}

fn sigmoid_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	sigmoid_family::<P>().create(param, param.sigmoid_param.engine)
}

fn tanh_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	tanh_family::<P>().create(param, param.tanh_param.engine)
}

register_layer_class!(AbsVal, AbsValLayer);
register_layer_class!(Bnll, BnllLayer);
register_layer_class!(Dropout, DropoutLayer);
register_layer_class!(Exp, ExpLayer);
register_layer_class!(Power, PowerLayer);
register_layer_class!(Threshold, ThresholdLayer);
register_layer_creator!(Relu, relu_layer);
register_layer_creator!(Sigmoid, sigmoid_layer);
register_layer_creator!(Tanh, tanh_layer);
