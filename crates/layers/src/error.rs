use brew_dataset::DatasetError;
use brew_factory::RegistryError;
use brew_proto::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerError {
	/// Duplicate registration or a lookup of an unregistered kind.
	#[error(transparent)]
	Registry(#[from] RegistryError),
	/// The requested engine is not available in this build.
	#[error("Layer {name} has unknown engine.")]
	UnknownEngine { name: String, engine: Engine },
	#[error(transparent)]
	Dataset(#[from] DatasetError),
}

pub type Result<T> = std::result::Result<T, LayerError>;
