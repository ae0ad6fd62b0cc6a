use brew_factory::GlobalRegistry;
use brew_proto::{LayerParameter, LayerType};
use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::common::FlattenLayer;
use crate::layer::construct;
use crate::test_support::ProbeLayer;

fn with_flatten_taken() -> LayerRegistry<f32> {
	let mut registry = LayerRegistry::new();
	registry
		.add_creator(LayerType::Flatten, construct::<f32, ProbeLayer<f32>>)
		.unwrap();
	registry
}

#[test]
fn bootstrap_collects_every_submission() {
	let mut registry = LayerRegistry::<f64>::new();
	bootstrap::<f64>(&mut registry).unwrap();
	assert_eq!(registry.len(), 36);

	let layer = registry
		.create_layer(&LayerParameter::new("flat", LayerType::Flatten))
		.unwrap();
	assert!(layer.as_any().is::<FlattenLayer<f64>>());
}

#[test]
fn register_into_rejects_taken_kind() {
	let mut registry = with_flatten_taken();
	let registrar = LayerRegistrar::<f32>::new(LayerType::Flatten, construct::<f32, FlattenLayer<f32>>, module_path!());
	let err = registrar.register_into(&mut registry).unwrap_err();
	assert_eq!(err.to_string(), "Layer type FLATTEN already registered.");

	let fresh = LayerRegistrar::<f32>::new(LayerType::Hdf5Data, construct::<f32, ProbeLayer<f32>>, module_path!());
	fresh.register_into(&mut registry).unwrap();
	assert!(registry.contains(LayerType::Hdf5Data));
}

#[test]
fn bootstrap_reports_conflicting_submission() {
	let mut registry = with_flatten_taken();
	let err = bootstrap::<f32>(&mut registry).unwrap_err();
	assert_eq!(err.to_string(), "Layer type FLATTEN already registered.");
}

#[test]
#[should_panic(expected = "Layer type FLATTEN already registered.")]
fn conflicting_submission_is_fatal_on_first_use() {
	let registry: GlobalRegistry<LayerRegistry<f32>> = GlobalRegistry::new("Layer", with_flatten_taken, bootstrap::<f32>);
	let _ = registry.read();
}
