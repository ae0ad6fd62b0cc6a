//! Net descriptions: ordered layer lists loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::layer::LayerParameter;

/// A whole model description.
///
/// ```toml
/// name = "lenet"
///
/// [[layer]]
/// name = "conv1"
/// type = "CONVOLUTION"
/// bottom = ["data"]
/// top = ["conv1"]
///
/// [layer.convolution_param]
/// num_output = 20
/// kernel_size = 5
/// engine = "CUDNN"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetParameter {
	pub name: String,
	/// Layers in declaration order.
	#[serde(rename = "layer")]
	pub layers: Vec<LayerParameter>,
}

impl NetParameter {
	/// Parses a net description from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a net description file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	/// Finds a layer by instance name.
	pub fn layer(&self, name: &str) -> Option<&LayerParameter> {
		self.layers.iter().find(|l| l.name == name)
	}
}

#[cfg(test)]
mod tests;
