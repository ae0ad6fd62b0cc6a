//! LMDB-backed adapter. Only built with the `lmdb` feature.

use std::marker::PhantomData;

use brew_proto::Db;

use crate::table::Table;

/// Dataset adapter for the LMDB backend.
pub struct LmdbDataset<K, V> {
	table: Table,
	_types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> LmdbDataset<K, V> {
	pub fn new() -> Self {
		Self {
			table: Table::new(Db::Lmdb),
			_types: PhantomData,
		}
	}
}

impl<K, V> Default for LmdbDataset<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl_table_dataset!(LmdbDataset);
