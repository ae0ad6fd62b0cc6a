use brew_proto::{LayerParameter, LayerType};
use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::common::FlattenLayer;
use crate::layer::construct;
use crate::test_support::ProbeLayer;

// HDF5_DATA has no built-in implementation; only this test registers it.
#[test]
fn late_registration_is_per_precision() {
	add_creator::<f64>(LayerType::Hdf5Data, construct::<f64, ProbeLayer<f64>>).unwrap();

	let param = LayerParameter::new("h5", LayerType::Hdf5Data);
	let layer = create_layer::<f64>(&param).unwrap();
	assert!(layer.as_any().is::<ProbeLayer<f64>>());
	assert!(registered_layer_types::<f64>().contains(&LayerType::Hdf5Data));

	let err = create_layer::<f32>(&param).unwrap_err();
	assert_eq!(
		err.to_string(),
		"Layer type HDF5_DATA is not registered (expected 1 creator, found 0)"
	);
	assert!(!registered_layer_types::<f32>().contains(&LayerType::Hdf5Data));
}

#[test]
fn builtin_kinds_cannot_be_replaced() {
	let err = add_creator::<f32>(LayerType::Flatten, construct::<f32, ProbeLayer<f32>>).unwrap_err();
	assert_eq!(err.to_string(), "Layer type FLATTEN already registered.");

	let layer = get_layer::<f32>(&LayerParameter::new("flat", LayerType::Flatten));
	assert!(layer.as_any().is::<FlattenLayer<f32>>());
}

#[test]
fn registries_bootstrap_on_first_use() {
	let _ = registered_layer_types::<f32>();
	assert!(f32::layer_registry().is_bootstrapped());
	assert_eq!(f64::layer_registry().label(), "Layer");
}

#[test]
#[should_panic(expected = "Layer type NONE is not registered")]
fn get_layer_on_unregistered_kind_is_fatal() {
	get_layer::<f64>(&LayerParameter::default());
}
