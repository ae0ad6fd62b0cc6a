//! Ordered byte table shared by the backend adapters.
//!
//! Committed records are kept in memory and mirrored to a single
//! `records` file in the database directory, so a database written in one
//! session can be reopened read-only in the next.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use brew_proto::Db;
use tracing::debug;

use crate::dataset::Mode;
use crate::error::{DatasetError, Result};

const RECORDS_FILE: &str = "records";
const STAGED_RECORDS_FILE: &str = "records.staged";

type Bytes = Vec<u8>;

struct OpenTable {
	path: PathBuf,
	mode: Mode,
	committed: BTreeMap<Bytes, Bytes>,
	pending: Vec<(Bytes, Bytes)>,
}

pub(crate) struct Table {
	backend: Db,
	open: Option<OpenTable>,
}

impl Table {
	pub(crate) fn new(backend: Db) -> Self {
		Self { backend, open: None }
	}

	pub(crate) fn backend(&self) -> Db {
		self.backend
	}

	pub(crate) fn is_open(&self) -> bool {
		self.open.is_some()
	}

	pub(crate) fn open(&mut self, path: &Path, mode: Mode) -> Result<()> {
		if self.open.is_some() {
			return Err(DatasetError::AlreadyOpen(self.backend));
		}
		let io = |error| DatasetError::Io {
			path: path.to_path_buf(),
			error,
		};
		match mode {
			Mode::Read if !path.is_dir() => {
				return Err(io(std::io::Error::new(ErrorKind::NotFound, "database does not exist")));
			}
			Mode::Read => {}
			Mode::ReadWrite => std::fs::create_dir_all(path).map_err(io)?,
			Mode::New => std::fs::create_dir(path).map_err(io)?,
		}

		let committed = load_records(&path.join(RECORDS_FILE))?;
		debug!(backend = %self.backend, path = %path.display(), ?mode, records = committed.len(), "opened dataset");
		self.open = Some(OpenTable {
			path: path.to_path_buf(),
			mode,
			committed,
			pending: Vec::new(),
		});
		Ok(())
	}

	fn table(&self) -> Result<&OpenTable> {
		self.open.as_ref().ok_or(DatasetError::NotOpen(self.backend))
	}

	fn table_mut(&mut self) -> Result<&mut OpenTable> {
		self.open.as_mut().ok_or(DatasetError::NotOpen(self.backend))
	}

	pub(crate) fn put(&mut self, key: Bytes, value: Bytes) -> Result<()> {
		let backend = self.backend;
		let table = self.table_mut()?;
		if table.mode == Mode::Read {
			return Err(DatasetError::ReadOnly(backend));
		}
		table.pending.push((key, value));
		Ok(())
	}

	pub(crate) fn get(&self, key: &[u8]) -> Result<Option<&[u8]>> {
		Ok(self.table()?.committed.get(key).map(Vec::as_slice))
	}

	pub(crate) fn first(&self) -> Result<Option<(&[u8], &[u8])>> {
		Ok(self.table()?.committed.iter().next().map(|(k, v)| (k.as_slice(), v.as_slice())))
	}

	pub(crate) fn last(&self) -> Result<Option<(&[u8], &[u8])>> {
		Ok(self.table()?.committed.iter().next_back().map(|(k, v)| (k.as_slice(), v.as_slice())))
	}

	pub(crate) fn keys(&self) -> Result<Vec<&[u8]>> {
		Ok(self.table()?.committed.keys().map(Vec::as_slice).collect())
	}

	pub(crate) fn commit(&mut self) -> Result<()> {
		let backend = self.backend;
		let table = self.table_mut()?;
		if table.mode == Mode::Read {
			return Err(DatasetError::ReadOnly(backend));
		}
		let mut merged = table.committed.clone();
		merged.extend(table.pending.iter().cloned());
		store_records(&table.path, &merged)?;
		let applied = table.pending.len();
		table.committed = merged;
		table.pending.clear();
		debug!(backend = %backend, applied, total = table.committed.len(), "committed dataset writes");
		Ok(())
	}

	pub(crate) fn close(&mut self) {
		if let Some(table) = self.open.take()
			&& !table.pending.is_empty()
		{
			debug!(backend = %self.backend, dropped = table.pending.len(), "closed dataset with uncommitted writes");
		}
	}
}

fn load_records(path: &Path) -> Result<BTreeMap<Bytes, Bytes>> {
	match std::fs::read(path) {
		Ok(bytes) => {
			let records: Vec<(Bytes, Bytes)> = postcard::from_bytes(&bytes)?;
			Ok(records.into_iter().collect())
		}
		Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
		Err(error) => Err(DatasetError::Io {
			path: path.to_path_buf(),
			error,
		}),
	}
}

/// Replaces the `records` file of the database at `dir`.
///
/// Writes a sibling file and renames it into place, so a failure leaves
/// the previous records intact.
fn store_records(dir: &Path, records: &BTreeMap<Bytes, Bytes>) -> Result<()> {
	let flat: Vec<(&Bytes, &Bytes)> = records.iter().collect();
	let bytes = postcard::to_stdvec(&flat)?;
	let staged = dir.join(STAGED_RECORDS_FILE);
	let target = dir.join(RECORDS_FILE);
	std::fs::write(&staged, bytes).map_err(|error| DatasetError::Io {
		path: staged.clone(),
		error,
	})?;
	std::fs::rename(&staged, &target).map_err(|error| {
		let _ = std::fs::remove_file(&staged);
		DatasetError::Io { path: target, error }
	})
}

#[cfg(test)]
mod tests;
