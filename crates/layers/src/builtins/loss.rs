//! Loss and evaluation layers.

define_layer!(
	/// Top-k classification accuracy. Not a loss, but evaluated alongside them.
	pub struct AccuracyLayer
);
define_layer!(pub struct ContrastiveLossLayer);
define_layer!(pub struct EuclideanLossLayer);
define_layer!(pub struct HingeLossLayer);
define_layer!(pub struct InfogainLossLayer);
define_layer!(pub struct MultinomialLogisticLossLayer);
define_layer!(pub struct SigmoidCrossEntropyLossLayer);
define_layer!(
	/// Softmax followed by multinomial logistic loss, computed together.
	pub struct SoftmaxWithLossLayer
);

register_layer_class!(Accuracy, AccuracyLayer);
register_layer_class!(ContrastiveLoss, ContrastiveLossLayer);
register_layer_class!(EuclideanLoss, EuclideanLossLayer);
register_layer_class!(HingeLoss, HingeLossLayer);
register_layer_class!(InfogainLoss, InfogainLossLayer);
register_layer_class!(MultinomialLogisticLoss, MultinomialLogisticLossLayer);
register_layer_class!(SigmoidCrossEntropyLoss, SigmoidCrossEntropyLossLayer);
register_layer_class!(SoftmaxLoss, SoftmaxWithLossLayer);
