//! Blob plumbing and dense layers.

use brew_proto::LayerParameter;

use crate::engine::EngineFamily;
use crate::global::LayerPrecision;
use crate::layer::{LayerResult, construct};

define_layer!(pub struct ArgMaxLayer);
define_layer!(pub struct ConcatLayer);
define_layer!(pub struct EltwiseLayer);
define_layer!(pub struct FlattenLayer);
define_layer!(
	/// Fully connected layer.
	pub struct InnerProductLayer
);
define_layer!(
	/// Mean-variance normalization.
	pub struct MvnLayer
);
define_layer!(
	/// Consumes its inputs and produces nothing.
	pub struct SilenceLayer
);
define_layer!(pub struct SliceLayer);
define_layer!(pub struct SplitLayer);
define_layer!(pub struct SoftmaxLayer);

pub(crate) fn softmax_family<P: LayerPrecision>() -> EngineFamily<P> {
	EngineFamily {
		name: "softmax",
		native: construct::<P, SoftmaxLayer<P>>,
		cudnn: cudnn_creator!(CudnnSoftmaxLayer),
		restriction: None,
	}
}

fn softmax_layer<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	softmax_family::<P>().create(param, param.softmax_param.engine)
}

register_layer_class!(ArgMax, ArgMaxLayer);
register_layer_class!(Concat, ConcatLayer);
register_layer_class!(Eltwise, EltwiseLayer);
register_layer_class!(Flatten, FlattenLayer);
register_layer_class!(InnerProduct, InnerProductLayer);
register_layer_class!(Mvn, MvnLayer);
register_layer_class!(Silence, SilenceLayer);
register_layer_class!(Slice, SliceLayer);
register_layer_class!(Split, SplitLayer);
register_layer_creator!(Softmax, softmax_layer);
