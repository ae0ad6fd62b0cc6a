use std::path::PathBuf;

use brew_proto::Db;
use thiserror::Error;

/// Errors raised by the dataset factory and adapters.
#[derive(Debug, Error)]
pub enum DatasetError {
	/// The requested backend kind or alias is not one the factory knows.
	#[error("Unknown dataset type {0}")]
	UnknownType(String),

	#[error("{0} dataset is not open")]
	NotOpen(Db),

	#[error("{0} dataset is already open")]
	AlreadyOpen(Db),

	#[error("{0} dataset was opened read-only")]
	ReadOnly(Db),

	#[error("key not found: {0}")]
	KeyNotFound(String),

	#[error("I/O error opening {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	#[error("value is not valid UTF-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),

	#[error("record codec error: {0}")]
	Record(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
