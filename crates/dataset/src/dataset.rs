//! The adapter contract shared by every backend.

use std::path::Path;

use brew_proto::Db;

use crate::error::Result;

/// How a dataset is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Existing database, no writes.
	Read,
	/// Existing or new database, writes allowed.
	ReadWrite,
	/// Fresh database; fails if one already exists at the path.
	New,
}

/// A key/value store bound to fixed key and value types.
///
/// Writes are buffered by [`put`](Dataset::put) and become visible to reads
/// only after [`commit`](Dataset::commit). Keys iterate in byte order of
/// their encoding.
pub trait Dataset<K, V>: Send {
	/// Backend kind this adapter wraps.
	fn backend(&self) -> Db;

	fn open(&mut self, path: &Path, mode: Mode) -> Result<()>;

	fn is_open(&self) -> bool;

	fn put(&mut self, key: &K, value: &V) -> Result<()>;

	fn get(&self, key: &K) -> Result<V>;

	/// The entry with the smallest key, if any.
	fn first(&self) -> Result<Option<(K, V)>>;

	/// The entry with the largest key, if any.
	fn last(&self) -> Result<Option<(K, V)>>;

	fn keys(&self) -> Result<Vec<K>>;

	/// Applies all buffered writes atomically. On failure nothing is applied
	/// and the writes stay buffered.
	fn commit(&mut self) -> Result<()>;

	/// Drops uncommitted writes and releases the database.
	fn close(&mut self);
}
