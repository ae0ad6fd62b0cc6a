use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;
use crate::{Db, Engine, LayerType, PoolMethod};

const LENET: &str = r#"
name = "lenet"

[[layer]]
name = "mnist"
type = "DATA"
top = ["data", "label"]

[layer.data_param]
source = "examples/mnist/mnist_train_lmdb"
batch_size = 64
backend = "lmdb"

[[layer]]
name = "conv1"
type = "CONVOLUTION"
bottom = ["data"]
top = ["conv1"]

[layer.convolution_param]
num_output = 20
kernel_size = 5

[[layer]]
name = "pool1"
type = "POOLING"
bottom = ["conv1"]
top = ["pool1"]

[layer.pooling_param]
pool = "MAX"
kernel_size = 2
stride = 2
pad = 1
engine = "CUDNN"
"#;

#[test]
fn parses_layers_in_declaration_order() {
	let net = NetParameter::from_toml_str(LENET).unwrap();
	assert_eq!(net.name, "lenet");
	let kinds: Vec<LayerType> = net.layers.iter().map(|l| l.layer_type).collect();
	assert_eq!(kinds, vec![LayerType::Data, LayerType::Convolution, LayerType::Pooling]);
}

#[test]
fn omitted_blocks_take_defaults() {
	let net = NetParameter::from_toml_str(LENET).unwrap();
	let conv = net.layer("conv1").unwrap();
	assert_eq!(conv.convolution_param.num_output, 20);
	assert_eq!(conv.convolution_param.engine, Engine::Default);
	assert_eq!(conv.pooling_param.pad, 0);

	let pool = net.layer("pool1").unwrap();
	assert_eq!(pool.pooling_param.pool, PoolMethod::Max);
	assert_eq!(pool.pooling_param.engine, Engine::Cudnn);
	assert!(pool.pooling_param.requests_padding());

	let data = net.layer("mnist").unwrap();
	assert_eq!(data.data_param.backend, Db::Lmdb);
	assert_eq!(data.top_size(), 2);
}

#[test]
fn unknown_layer_alias_is_a_parse_error() {
	let err = NetParameter::from_toml_str("[[layer]]\nname = \"x\"\ntype = \"convolution\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn load_reads_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(LENET.as_bytes()).unwrap();
	let net = NetParameter::load(file.path()).unwrap();
	assert_eq!(net.layers.len(), 3);
}

#[test]
fn load_reports_missing_file() {
	let err = NetParameter::load(Path::new("/nonexistent/brew/net.toml")).unwrap_err();
	match err {
		ConfigError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/brew/net.toml")),
		other => panic!("expected Io error, got {other:?}"),
	}
}
