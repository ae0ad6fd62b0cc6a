//! Byte codecs for dataset keys and values.

use brew_proto::Datum;

use crate::error::Result;

/// Converts a key or value to and from the bytes a backend stores.
pub trait DatasetCodec: Sized {
	fn encode(&self) -> Result<Vec<u8>>;
	fn decode(bytes: &[u8]) -> Result<Self>;
}

impl DatasetCodec for String {
	fn encode(&self) -> Result<Vec<u8>> {
		Ok(self.as_bytes().to_vec())
	}

	fn decode(bytes: &[u8]) -> Result<Self> {
		Ok(String::from_utf8(bytes.to_vec())?)
	}
}

impl DatasetCodec for Vec<u8> {
	fn encode(&self) -> Result<Vec<u8>> {
		Ok(self.clone())
	}

	fn decode(bytes: &[u8]) -> Result<Self> {
		Ok(bytes.to_vec())
	}
}

impl DatasetCodec for Datum {
	fn encode(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	fn decode(bytes: &[u8]) -> Result<Self> {
		Ok(postcard::from_bytes(bytes)?)
	}
}
