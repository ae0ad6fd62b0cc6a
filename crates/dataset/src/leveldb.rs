//! LevelDB-backed adapter.

use std::marker::PhantomData;

use brew_proto::Db;

use crate::table::Table;

/// Dataset adapter for the LevelDB backend.
pub struct LeveldbDataset<K, V> {
	table: Table,
	_types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> LeveldbDataset<K, V> {
	pub fn new() -> Self {
		Self {
			table: Table::new(Db::Leveldb),
			_types: PhantomData,
		}
	}
}

impl<K, V> Default for LeveldbDataset<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl_table_dataset!(LeveldbDataset);
