//! The keyed constructor table.

use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::RegistryError;

/// Maps each discriminator to at most one constructor.
///
/// `C` is normally a plain function pointer; the registry never holds
/// component instances.
pub struct Registry<K, C> {
	label: &'static str,
	creators: FxHashMap<K, C>,
}

impl<K, C> Registry<K, C> {
	/// Creates an empty registry. `label` names it in error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			creators: FxHashMap::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.creators.len()
	}

	pub fn is_empty(&self) -> bool {
		self.creators.is_empty()
	}
}

impl<K, C> Registry<K, C>
where
	K: Eq + Hash + fmt::Display,
{
	/// Inserts a creator for `key`.
	///
	/// An existing entry is never overwritten; a second registration for the
	/// same key is rejected with [`RegistryError::Duplicate`].
	pub fn register(&mut self, key: K, creator: C) -> Result<(), RegistryError> {
		match self.creators.entry(key) {
			Entry::Occupied(e) => Err(RegistryError::Duplicate {
				registry: self.label,
				key: e.key().to_string(),
			}),
			Entry::Vacant(e) => {
				trace!(registry = self.label, key = %e.key(), "registered creator");
				e.insert(creator);
				Ok(())
			}
		}
	}

	/// Returns the creator registered for `key`.
	///
	/// Exactly one match is required; a miss is [`RegistryError::Unregistered`].
	pub fn get(&self, key: &K) -> Result<&C, RegistryError> {
		self.creators.get(key).ok_or_else(|| RegistryError::Unregistered {
			registry: self.label,
			key: key.to_string(),
		})
	}

	pub fn contains(&self, key: &K) -> bool {
		self.creators.contains_key(key)
	}
}

impl<K, C> Registry<K, C>
where
	K: Ord + Clone,
{
	/// Registered keys in ascending order.
	pub fn keys(&self) -> Vec<K> {
		let mut keys: Vec<K> = self.creators.keys().cloned().collect();
		keys.sort();
		keys
	}
}

impl<K: fmt::Debug, C> fmt::Debug for Registry<K, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("keys", &self.creators.keys().collect::<Vec<_>>())
			.finish()
	}
}
