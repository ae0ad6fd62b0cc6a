use thiserror::Error;

/// Errors raised by registry insertion and lookup.
///
/// Both variants indicate a build or configuration defect rather than a
/// runtime condition; callers are not expected to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// A creator was registered twice for the same key.
	#[error("{registry} type {key} already registered.")]
	Duplicate {
		/// Label of the registry that rejected the insertion.
		registry: &'static str,
		/// The colliding key.
		key: String,
	},
	/// A lookup found no creator for the key.
	#[error("{registry} type {key} is not registered (expected 1 creator, found 0)")]
	Unregistered {
		/// Label of the registry that was searched.
		registry: &'static str,
		/// The missing key.
		key: String,
	},
}

impl RegistryError {
	/// Returns the key the error is about.
	pub fn key(&self) -> &str {
		match self {
			Self::Duplicate { key, .. } | Self::Unregistered { key, .. } => key,
		}
	}
}
