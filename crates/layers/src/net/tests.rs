use brew_proto::{Engine, LayerType, NetParameter};
use pretty_assertions::assert_eq;

use super::*;
use crate::error::LayerError;

const NET: &str = r#"
name = "lenet"

[[layer]]
name = "mnist"
type = "DATA"
top = ["data", "label"]

[[layer]]
name = "conv1"
type = "CONVOLUTION"
bottom = ["data"]
top = ["conv1"]

[[layer]]
name = "pool1"
type = "POOLING"
bottom = ["conv1"]
top = ["pool1"]

[layer.pooling_param]
kernel_size = 2
stride = 2
pad = 1
engine = "NATIVE"

[[layer]]
name = "ip1"
type = "INNER_PRODUCT"
bottom = ["pool1"]
top = ["ip1"]

[[layer]]
name = "relu1"
type = "RELU"
bottom = ["ip1"]
top = ["ip1"]

[[layer]]
name = "loss"
type = "SOFTMAX_LOSS"
bottom = ["ip1", "label"]
top = ["loss"]
"#;

#[test]
fn builds_layers_in_declaration_order() {
	let net = NetParameter::from_toml_str(NET).unwrap();
	let layers = create_net::<f32>(&net).unwrap();

	let names: Vec<&str> = layers.iter().map(|l| l.name()).collect();
	assert_eq!(names, vec!["mnist", "conv1", "pool1", "ip1", "relu1", "loss"]);
	let conv = if cfg!(feature = "cudnn") { "CudnnConvolutionLayer" } else { "ConvolutionLayer" };
	let relu = if cfg!(feature = "cudnn") { "CudnnReluLayer" } else { "ReluLayer" };
	let types: Vec<&str> = layers.iter().map(|l| l.type_name()).collect();
	assert_eq!(
		types,
		vec!["DataLayer", conv, "PoolingLayer", "InnerProductLayer", relu, "SoftmaxWithLossLayer"]
	);
	assert_eq!(layers[2].engine(), Engine::Native);
	assert_eq!(layers[5].layer_type(), LayerType::SoftmaxLoss);
}

#[test]
fn double_precision_builds_the_same_net() {
	let net = NetParameter::from_toml_str(NET).unwrap();
	assert_eq!(create_net::<f64>(&net).unwrap().len(), 6);
}

#[test]
fn first_failure_stops_construction() {
	let mut net = NetParameter::from_toml_str(NET).unwrap();
	net.layers[3].layer_type = LayerType::Hdf5Output;
	let err = create_net::<f32>(&net).err().unwrap();
	assert!(matches!(err, LayerError::Registry(_)));
	assert_eq!(
		err.to_string(),
		"Layer type HDF5_OUTPUT is not registered (expected 1 creator, found 0)"
	);
}
