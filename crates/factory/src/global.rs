//! Process-wide registries that bootstrap themselves on first use.

use std::sync::OnceLock;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error};

use crate::error::RegistryError;

/// Populates a freshly created registry. Runs once per process.
pub type Bootstrap<R> = fn(&mut R) -> Result<(), RegistryError>;

/// A registry held in process-wide state.
///
/// Construction is `const`, so instances live in `static`s. The registry
/// itself is created lazily on first access rather than at static-init
/// time, and the bootstrap function runs exactly once. There is no reset.
///
/// A bootstrap error means two components claimed the same key; that is a
/// build defect and panics.
pub struct GlobalRegistry<R> {
	label: &'static str,
	init: fn() -> R,
	bootstrap: Bootstrap<R>,
	cell: OnceLock<RwLock<R>>,
}

impl<R> GlobalRegistry<R> {
	pub const fn new(label: &'static str, init: fn() -> R, bootstrap: Bootstrap<R>) -> Self {
		Self {
			label,
			init,
			bootstrap,
			cell: OnceLock::new(),
		}
	}

	fn cell(&self) -> &RwLock<R> {
		self.cell.get_or_init(|| {
			let mut registry = (self.init)();
			if let Err(err) = (self.bootstrap)(&mut registry) {
				error!(registry = self.label, error = %err, "registry bootstrap failed");
				panic!("{err}");
			}
			debug!(registry = self.label, "registry bootstrapped");
			RwLock::new(registry)
		})
	}

	/// Shared access for lookups. Bootstraps on first call.
	pub fn read(&self) -> RwLockReadGuard<'_, R> {
		self.cell().read()
	}

	/// Exclusive access for registrations made after start-up.
	pub fn write(&self) -> RwLockWriteGuard<'_, R> {
		self.cell().write()
	}

	/// Whether the bootstrap has already run.
	pub fn is_bootstrapped(&self) -> bool {
		self.cell.get().is_some()
	}

	pub fn label(&self) -> &'static str {
		self.label
	}
}
