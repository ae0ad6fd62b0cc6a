//! Layer configuration: the discriminator and per-family parameter blocks.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::data::DataParameter;
use crate::error::UnknownDiscriminant;

macro_rules! layer_types {
	(
		$(
			$(#[$attr:meta])*
			$variant:ident = $num:literal => $name:literal,
		)*
	) => {
		/// Discriminator naming every layer kind the framework knows.
		///
		/// The string form is the exact upper-case alias (`"INNER_PRODUCT"`);
		/// parsing is case-sensitive and recognizes nothing else.
		#[derive(
			Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
			Serialize, Deserialize, Display, EnumString, EnumIter,
		)]
		#[repr(i32)]
		pub enum LayerType {
			$(
				$(#[$attr])*
				#[serde(rename = $name)]
				#[strum(serialize = $name)]
				$variant = $num,
			)*
		}

		impl TryFrom<i32> for LayerType {
			type Error = UnknownDiscriminant;

			fn try_from(value: i32) -> Result<Self, Self::Error> {
				match value {
					$( $num => Ok(Self::$variant), )*
					other => Err(UnknownDiscriminant { kind: "layer type", value: other }),
				}
			}
		}
	};
}

layer_types! {
	#[default]
	None = 0 => "NONE",
	Accuracy = 1 => "ACCURACY",
	Bnll = 2 => "BNLL",
	Concat = 3 => "CONCAT",
	Convolution = 4 => "CONVOLUTION",
	Data = 5 => "DATA",
	Dropout = 6 => "DROPOUT",
	EuclideanLoss = 7 => "EUCLIDEAN_LOSS",
	Flatten = 8 => "FLATTEN",
	Hdf5Data = 9 => "HDF5_DATA",
	Hdf5Output = 10 => "HDF5_OUTPUT",
	Im2col = 11 => "IM2COL",
	ImageData = 12 => "IMAGE_DATA",
	InfogainLoss = 13 => "INFOGAIN_LOSS",
	InnerProduct = 14 => "INNER_PRODUCT",
	Lrn = 15 => "LRN",
	MultinomialLogisticLoss = 16 => "MULTINOMIAL_LOGISTIC_LOSS",
	Pooling = 17 => "POOLING",
	Relu = 18 => "RELU",
	Sigmoid = 19 => "SIGMOID",
	Softmax = 20 => "SOFTMAX",
	SoftmaxLoss = 21 => "SOFTMAX_LOSS",
	Split = 22 => "SPLIT",
	Tanh = 23 => "TANH",
	WindowData = 24 => "WINDOW_DATA",
	Eltwise = 25 => "ELTWISE",
	Power = 26 => "POWER",
	SigmoidCrossEntropyLoss = 27 => "SIGMOID_CROSS_ENTROPY_LOSS",
	HingeLoss = 28 => "HINGE_LOSS",
	MemoryData = 29 => "MEMORY_DATA",
	ArgMax = 30 => "ARGMAX",
	Threshold = 31 => "THRESHOLD",
	DummyData = 32 => "DUMMY_DATA",
	Slice = 33 => "SLICE",
	Mvn = 34 => "MVN",
	AbsVal = 35 => "ABSVAL",
	Silence = 36 => "SILENCE",
	ContrastiveLoss = 37 => "CONTRASTIVE_LOSS",
	Exp = 38 => "EXP",
}

impl LayerType {
	/// Returns the wire number of this kind.
	#[inline]
	pub fn wire(self) -> i32 {
		self as i32
	}
}

/// Preferred backing implementation for layer families that have more than one.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum Engine {
	/// Let the build decide: cuDNN when compiled in, native otherwise.
	#[default]
	Default = 0,
	/// The always-available native implementation.
	Native = 1,
	/// The cuDNN-accelerated implementation.
	Cudnn = 2,
}

impl TryFrom<i32> for Engine {
	type Error = UnknownDiscriminant;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Default),
			1 => Ok(Self::Native),
			2 => Ok(Self::Cudnn),
			other => Err(UnknownDiscriminant { kind: "engine", value: other }),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvolutionParameter {
	pub num_output: u32,
	pub bias_term: bool,
	pub pad: u32,
	pub pad_h: u32,
	pub pad_w: u32,
	pub kernel_size: u32,
	pub kernel_h: u32,
	pub kernel_w: u32,
	pub stride: u32,
	pub stride_h: u32,
	pub stride_w: u32,
	pub group: u32,
	pub engine: Engine,
}

impl Default for ConvolutionParameter {
	fn default() -> Self {
		Self {
			num_output: 0,
			bias_term: true,
			pad: 0,
			pad_h: 0,
			pad_w: 0,
			kernel_size: 0,
			kernel_h: 0,
			kernel_w: 0,
			stride: 1,
			stride_h: 0,
			stride_w: 0,
			group: 1,
			engine: Engine::Default,
		}
	}
}

/// Pooling reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolMethod {
	#[default]
	Max,
	Ave,
	Stochastic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolingParameter {
	pub pool: PoolMethod,
	pub pad: u32,
	pub pad_h: u32,
	pub pad_w: u32,
	pub kernel_size: u32,
	pub kernel_h: u32,
	pub kernel_w: u32,
	pub stride: u32,
	pub stride_h: u32,
	pub stride_w: u32,
	pub engine: Engine,
}

impl Default for PoolingParameter {
	fn default() -> Self {
		Self {
			pool: PoolMethod::Max,
			pad: 0,
			pad_h: 0,
			pad_w: 0,
			kernel_size: 0,
			kernel_h: 0,
			kernel_w: 0,
			stride: 1,
			stride_h: 0,
			stride_w: 0,
			engine: Engine::Default,
		}
	}
}

impl PoolingParameter {
	/// Returns true if any padding field is non-zero.
	pub fn requests_padding(&self) -> bool {
		self.pad != 0 || self.pad_h != 0 || self.pad_w != 0
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReluParameter {
	/// Slope applied to negative inputs (leaky ReLU when non-zero).
	pub negative_slope: f32,
	pub engine: Engine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigmoidParameter {
	pub engine: Engine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftmaxParameter {
	pub engine: Engine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TanhParameter {
	pub engine: Engine,
}

/// Description of one layer instance.
///
/// Parameter blocks that a configuration omits take their default values,
/// so a factory can always read `param.pooling_param.engine` without
/// checking for presence first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerParameter {
	/// Instance name, used in diagnostics.
	pub name: String,
	/// Discriminator selecting the registered constructor.
	#[serde(rename = "type")]
	pub layer_type: LayerType,
	/// Named inputs.
	pub bottom: Vec<String>,
	/// Named outputs.
	pub top: Vec<String>,
	pub convolution_param: ConvolutionParameter,
	pub pooling_param: PoolingParameter,
	pub relu_param: ReluParameter,
	pub sigmoid_param: SigmoidParameter,
	pub softmax_param: SoftmaxParameter,
	pub tanh_param: TanhParameter,
	pub data_param: DataParameter,
}

impl LayerParameter {
	/// Creates a parameter with the given name and kind and default blocks.
	pub fn new(name: impl Into<String>, layer_type: LayerType) -> Self {
		Self {
			name: name.into(),
			layer_type,
			..Self::default()
		}
	}

	/// Appends a named input.
	pub fn with_bottom(mut self, bottom: impl Into<String>) -> Self {
		self.bottom.push(bottom.into());
		self
	}

	/// Appends a named output.
	pub fn with_top(mut self, top: impl Into<String>) -> Self {
		self.top.push(top.into());
		self
	}

	/// Number of named outputs.
	#[inline]
	pub fn top_size(&self) -> usize {
		self.top.len()
	}
}
