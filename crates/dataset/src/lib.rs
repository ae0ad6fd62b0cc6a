//! Key/value datasets backing the data layers.
//!
//! A [`Dataset`] is an adapter over one storage backend, bound to a fixed
//! key and value type. [`create_dataset`] picks the adapter for a
//! [`Db`](brew_proto::Db) kind; [`create_dataset_named`] does the same for
//! the string aliases `"leveldb"` and `"lmdb"`.
//!
//! The factory is a closed dispatch: there is no registration hook, and a
//! new backend means a new match arm.

/// Implements [`Dataset`] for an adapter holding a `table: Table` field.
macro_rules! impl_table_dataset {
	($adapter:ident) => {
		impl<K, V> $crate::Dataset<K, V> for $adapter<K, V>
		where
			K: $crate::DatasetCodec,
			V: $crate::DatasetCodec,
		{
			fn backend(&self) -> brew_proto::Db {
				self.table.backend()
			}

			fn open(&mut self, path: &std::path::Path, mode: $crate::Mode) -> $crate::Result<()> {
				self.table.open(path, mode)
			}

			fn is_open(&self) -> bool {
				self.table.is_open()
			}

			fn put(&mut self, key: &K, value: &V) -> $crate::Result<()> {
				self.table.put(key.encode()?, value.encode()?)
			}

			fn get(&self, key: &K) -> $crate::Result<V> {
				let encoded = key.encode()?;
				match self.table.get(&encoded)? {
					Some(bytes) => V::decode(bytes),
					None => Err($crate::DatasetError::KeyNotFound(String::from_utf8_lossy(&encoded).into_owned())),
				}
			}

			fn first(&self) -> $crate::Result<Option<(K, V)>> {
				match self.table.first()? {
					Some((k, v)) => Ok(Some((K::decode(k)?, V::decode(v)?))),
					None => Ok(None),
				}
			}

			fn last(&self) -> $crate::Result<Option<(K, V)>> {
				match self.table.last()? {
					Some((k, v)) => Ok(Some((K::decode(k)?, V::decode(v)?))),
					None => Ok(None),
				}
			}

			fn keys(&self) -> $crate::Result<Vec<K>> {
				self.table.keys()?.into_iter().map(K::decode).collect()
			}

			fn commit(&mut self) -> $crate::Result<()> {
				self.table.commit()
			}

			fn close(&mut self) {
				self.table.close();
			}
		}
	};
}

pub mod codec;
pub mod dataset;
pub mod error;
pub mod factory;
pub mod leveldb;
#[cfg(feature = "lmdb")]
pub mod lmdb;
mod table;

pub use codec::DatasetCodec;
pub use dataset::{Dataset, Mode};
pub use error::{DatasetError, Result};
pub use factory::{
	BytesDataset, DatumDataset, StringDataset, create_dataset, create_dataset_named, create_dataset_raw, get_dataset_named,
	get_dataset_raw,
};
pub use leveldb::LeveldbDataset;
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbDataset;
