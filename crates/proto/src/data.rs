//! Dataset backend selection and the record type data layers store.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::UnknownDiscriminant;

/// Key/value storage backend.
///
/// String aliases are exactly `"leveldb"` and `"lmdb"`.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(i32)]
pub enum Db {
	#[default]
	Leveldb = 0,
	Lmdb = 1,
}

impl TryFrom<i32> for Db {
	type Error = UnknownDiscriminant;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Leveldb),
			1 => Ok(Self::Lmdb),
			other => Err(UnknownDiscriminant { kind: "dataset type", value: other }),
		}
	}
}

/// Parameters of a database-backed data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataParameter {
	/// Path to the database.
	pub source: String,
	pub batch_size: u32,
	/// Number of leading records to skip.
	pub rand_skip: u32,
	pub backend: Db,
	pub scale: f32,
	pub mean_file: String,
	pub crop_size: u32,
	pub mirror: bool,
}

impl Default for DataParameter {
	fn default() -> Self {
		Self {
			source: String::new(),
			batch_size: 0,
			rand_skip: 0,
			backend: Db::Leveldb,
			scale: 1.0,
			mean_file: String::new(),
			crop_size: 0,
			mirror: false,
		}
	}
}

/// A single labeled sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datum {
	pub channels: u32,
	pub height: u32,
	pub width: u32,
	/// Raw pixel bytes, channel-major.
	pub data: Vec<u8>,
	pub label: i32,
	/// Float-valued samples; used instead of `data` when non-empty.
	pub float_data: Vec<f32>,
	/// Whether `data` holds an encoded image rather than raw pixels.
	pub encoded: bool,
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	#[test]
	fn backend_aliases_are_exact() {
		assert_eq!(Db::from_str("leveldb").unwrap(), Db::Leveldb);
		assert_eq!(Db::from_str("lmdb").unwrap(), Db::Lmdb);
		assert!(Db::from_str("LMDB").is_err());
		assert!(Db::from_str("rocksdb").is_err());
		assert_eq!(Db::Lmdb.to_string(), "lmdb");
	}

	#[test]
	fn backend_wire_numbers() {
		assert_eq!(Db::try_from(0).unwrap(), Db::Leveldb);
		assert_eq!(Db::try_from(1).unwrap(), Db::Lmdb);
		assert_eq!(Db::try_from(5).unwrap_err().to_string(), "unknown dataset type 5");
	}
}
