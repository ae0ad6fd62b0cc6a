//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a net description.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a net description file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The file is not valid TOML or does not match the message schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// A wire number that does not name any variant of a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} {value}")]
pub struct UnknownDiscriminant {
	/// Which enum was being decoded.
	pub kind: &'static str,
	/// The offending wire number.
	pub value: i32,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
