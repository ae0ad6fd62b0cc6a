//! Closed dispatch from backend kind to dataset adapter.

use std::str::FromStr;

use brew_proto::{Datum, Db};
use tracing::{debug, error};

use crate::codec::DatasetCodec;
use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};
use crate::leveldb::LeveldbDataset;

/// `(string, string)` dataset.
pub type StringDataset = Box<dyn Dataset<String, String>>;
/// `(string, bytes)` dataset.
pub type BytesDataset = Box<dyn Dataset<String, Vec<u8>>>;
/// `(string, datum)` dataset, the one data layers read.
pub type DatumDataset = Box<dyn Dataset<String, Datum>>;

/// Creates an unopened adapter for `backend`.
///
/// Returns `Ok(None)` when the backend was excluded from this build; the
/// caller decides whether that is fatal.
pub fn create_dataset<K, V>(backend: Db) -> Result<Option<Box<dyn Dataset<K, V>>>>
where
	K: DatasetCodec + 'static,
	V: DatasetCodec + 'static,
{
	debug!(%backend, "creating dataset");
	match backend {
		Db::Leveldb => Ok(Some(Box::new(LeveldbDataset::<K, V>::new()))),
		Db::Lmdb => lmdb(),
	}
}

#[cfg(feature = "lmdb")]
fn lmdb<K, V>() -> Result<Option<Box<dyn Dataset<K, V>>>>
where
	K: DatasetCodec + 'static,
	V: DatasetCodec + 'static,
{
	Ok(Some(Box::new(crate::lmdb::LmdbDataset::<K, V>::new())))
}

#[cfg(not(feature = "lmdb"))]
fn lmdb<K: 'static, V: 'static>() -> Result<Option<Box<dyn Dataset<K, V>>>> {
	tracing::warn!(backend = %Db::Lmdb, "dataset backend not available in this build");
	Ok(None)
}

/// Creates an adapter from its string alias.
///
/// Only `"leveldb"` and `"lmdb"` are recognized, case-sensitively.
pub fn create_dataset_named<K, V>(name: &str) -> Result<Option<Box<dyn Dataset<K, V>>>>
where
	K: DatasetCodec + 'static,
	V: DatasetCodec + 'static,
{
	let backend = Db::from_str(name).map_err(|_| unknown_type(name))?;
	create_dataset(backend)
}

/// Creates an adapter from a wire-level backend number.
pub fn create_dataset_raw<K, V>(value: i32) -> Result<Option<Box<dyn Dataset<K, V>>>>
where
	K: DatasetCodec + 'static,
	V: DatasetCodec + 'static,
{
	let backend = Db::try_from(value).map_err(|e| unknown_type(e.value))?;
	create_dataset(backend)
}

/// Like [`create_dataset_named`], but an unknown name is fatal.
///
/// # Panics
///
/// Panics if `name` is not a known backend alias.
pub fn get_dataset_named<K, V>(name: &str) -> Option<Box<dyn Dataset<K, V>>>
where
	K: DatasetCodec + 'static,
	V: DatasetCodec + 'static,
{
	create_dataset_named(name).unwrap_or_else(|err| panic!("{err}"))
}

/// Like [`create_dataset_raw`], but an unknown wire number is fatal.
///
/// # Panics
///
/// Panics if `value` is not a known backend number.
pub fn get_dataset_raw<K, V>(value: i32) -> Option<Box<dyn Dataset<K, V>>>
where
	K: DatasetCodec + 'static,
	V: DatasetCodec + 'static,
{
	create_dataset_raw(value).unwrap_or_else(|err| panic!("{err}"))
}

/// Builds the unknown-type error and emits its diagnostic.
fn unknown_type(value: impl std::fmt::Display) -> DatasetError {
	let err = DatasetError::UnknownType(value.to_string());
	error!("{err}");
	err
}
